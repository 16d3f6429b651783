use actix_web::{web, HttpResponse};

use errors::ErrorResponse;

pub mod polls;
pub mod questions;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .service(
                web::scope("/api")
                    .service(web::scope("/questions").route("", web::get().to(questions::get_all))),
            )
            .service(
                web::scope("/polls")
                    .route("", web::get().to(polls::index))
                    .route("/", web::get().to(polls::index))
                    .route("/{id}/", web::get().to(polls::detail))
                    .route("/{id}/results/", web::get().to(polls::results))
                    .route("/{id}/vote/", web::post().to(polls::vote)),
            ),
    );
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}
