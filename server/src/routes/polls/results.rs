use actix_web::{
    web::{Data, Path},
    HttpResponse,
};
use tera::Tera;

use db::PgPool;
use errors::Error;

use crate::handlers::get_question_details;
use crate::templates::render;

pub async fn results(
    question_id: Path<i32>,
    pool: Data<PgPool>,
    tera: Data<Tera>,
) -> Result<HttpResponse, Error> {
    let details = get_question_details(pool, question_id.into_inner()).await?;

    render(&tera, "polls/results.html", &details)
}
