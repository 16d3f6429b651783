use actix_web::{web::Data, HttpResponse};
use serde::Serialize;
use tera::Tera;

use db::PgPool;
use errors::Error;

use crate::handlers::{get_published_questions, QuestionSummary};
use crate::settings::Settings;
use crate::templates::render;

#[derive(Serialize)]
struct IndexContext {
    latest_question_list: Vec<QuestionSummary>,
}

pub async fn index(
    pool: Data<PgPool>,
    tera: Data<Tera>,
    settings: Data<Settings>,
) -> Result<HttpResponse, Error> {
    let latest_question_list = get_published_questions(pool, &settings).await?;

    render(
        &tera,
        "polls/index.html",
        &IndexContext {
            latest_question_list,
        },
    )
}
