use actix_web::{
    http::header,
    web::{block, Data, Form, Path},
    HttpResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tera::Tera;
use validator::Validate;

use db::{
    get_conn,
    models::{Choice, Question},
    PgPool,
};
use errors::Error;

use crate::handlers::get_question_details;
use crate::routes::polls::DetailContext;
use crate::templates::render;
use crate::validate::validate;

#[derive(Clone, Deserialize, Serialize, Validate)]
pub struct VoteForm {
    #[validate(range(min = 1))]
    choice: Option<i32>,
}

pub async fn vote(
    question_id: Path<i32>,
    params: Form<VoteForm>,
    pool: Data<PgPool>,
    tera: Data<Tera>,
) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();
    let params = params.into_inner();
    let now = Utc::now();
    let connection_pool = pool.clone();

    let voted: Result<Option<Choice>, Error> = block(move || {
        let connection = get_conn(&connection_pool)?;
        // 404 before looking at the form, same as the detail page
        let question = Question::find_published_by_id(&connection, question_id, now)?;

        let choice_id = match (validate(&params), params.choice) {
            (Ok(()), Some(choice_id)) => choice_id,
            _ => return Ok(None),
        };

        match Choice::vote(&connection, question.id, choice_id) {
            Ok(choice) => Ok(Some(choice)),
            Err(Error::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    })
    .await?;

    match voted? {
        Some(choice) => {
            info!(
                "Vote recorded for choice {} of question {}",
                choice.id, question_id
            );
            Ok(HttpResponse::SeeOther()
                .insert_header((
                    header::LOCATION,
                    format!("/polls/{}/results/", question_id),
                ))
                .finish())
        }
        None => {
            let details = get_question_details(pool, question_id).await?;

            render(
                &tera,
                "polls/detail.html",
                &DetailContext {
                    question: &details.question,
                    choices: &details.choices,
                    missing_choice: true,
                },
            )
        }
    }
}
