use actix_web::web::{block, Data};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Choice, Question},
    PgPool,
};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct QuestionDetails {
    pub question: Question,
    pub choices: Vec<Choice>,
}

/// Loads a published question with its choices. Unknown and not yet published
/// questions are both `Error::NotFound`.
pub async fn get_question_details(
    pool: Data<PgPool>,
    question_id: i32,
) -> Result<QuestionDetails, Error> {
    let now = Utc::now();

    let data: Result<(Question, Vec<Choice>), Error> = block(move || {
        let connection = get_conn(&pool)?;
        let question = Question::find_published_by_id(&connection, question_id, now)?;
        let choices = Choice::find_by_question(&connection, &question)?;
        Ok((question, choices))
    })
    .await?;

    let (question, choices) = data?;

    Ok(QuestionDetails { question, choices })
}
