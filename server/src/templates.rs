use actix_web::HttpResponse;
use serde::Serialize;
use tera::{Context, Tera};

use errors::Error;

/// Loads every `.html` file below `template_dir`.
pub fn new_engine(template_dir: &str) -> Result<Tera, Error> {
    let glob = format!("{}/**/*.html", template_dir.trim_end_matches('/'));

    Tera::new(&glob).map_err(|err| {
        error!("Failed to load templates from {} - {}", glob, err);
        err.into()
    })
}

pub fn render_to_string<T: Serialize>(
    tera: &Tera,
    template_name: &str,
    context: &T,
) -> Result<String, Error> {
    let context = Context::from_serialize(context)?;
    let html = tera.render(template_name, &context)?;

    Ok(html)
}

pub fn render<T: Serialize>(
    tera: &Tera,
    template_name: &str,
    context: &T,
) -> Result<HttpResponse, Error> {
    let html = render_to_string(tera, template_name, context)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
