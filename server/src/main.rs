#[macro_use]
extern crate log;

use std::io;

use actix_web::{middleware::Logger, web, web::Data, App, HttpServer};
use dotenv::dotenv;

mod handlers;
mod routes;
mod settings;
mod templates;
mod tests;
mod validate;

use crate::routes::{not_found, routes};
use crate::settings::Settings;

fn invalid_input<E>(err: E) -> io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    io::Error::new(io::ErrorKind::InvalidInput, err)
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let settings = Settings::from_env().map_err(invalid_input)?;
    let pool = db::new_pool(&settings.database_url).map_err(invalid_input)?;
    let tera = templates::new_engine(&settings.template_dir).map_err(invalid_input)?;

    info!(
        "Listening on {} (recent window {}h, index limit {:?})",
        settings.bind_address,
        settings.recent_window.num_hours(),
        settings.index_limit
    );

    let bind_address = settings.bind_address.clone();
    let pool = Data::new(pool);
    let tera = Data::new(tera);
    let settings = Data::new(settings);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Logger::new("%a %{User-Agent}i"))
            .app_data(pool.clone())
            .app_data(tera.clone())
            .app_data(settings.clone())
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}
