use actix_web::{
    web::{Data, Json},
    Result,
};

use db::PgPool;
use errors::Error;

use crate::handlers::{get_published_questions, QuestionSummary};
use crate::settings::Settings;

pub async fn get_all(
    pool: Data<PgPool>,
    settings: Data<Settings>,
) -> Result<Json<Vec<QuestionSummary>>, Error> {
    let questions = get_published_questions(pool, &settings).await?;

    Ok(Json(questions))
}
