use actix_web::{
    web::{Data, Path},
    HttpResponse,
};
use serde::Serialize;
use tera::Tera;

use db::{
    models::{Choice, Question},
    PgPool,
};
use errors::Error;

use crate::handlers::get_question_details;
use crate::templates::render;

#[derive(Serialize)]
pub struct DetailContext<'a> {
    pub question: &'a Question,
    pub choices: &'a [Choice],
    pub missing_choice: bool,
}

pub async fn detail(
    question_id: Path<i32>,
    pool: Data<PgPool>,
    tera: Data<Tera>,
) -> Result<HttpResponse, Error> {
    let details = get_question_details(pool, question_id.into_inner()).await?;

    render(
        &tera,
        "polls/detail.html",
        &DetailContext {
            question: &details.question,
            choices: &details.choices,
            missing_choice: false,
        },
    )
}
