#[cfg(test)]
pub mod tests {
    use actix_web::{
        dev::ServiceResponse,
        http::header,
        test,
        web::{self, Data},
        App,
    };
    use chrono::{Duration, Utc};
    use dotenv::dotenv;
    use serde::{de::DeserializeOwned, Serialize};

    use db::{get_conn, models::Question, PgPool};

    use crate::routes::{not_found, routes};
    use crate::settings::{default_template_dir, Settings};
    use crate::templates::new_engine;

    pub fn test_settings() -> Settings {
        Settings {
            database_url: String::new(),
            bind_address: "127.0.0.1:0".to_string(),
            template_dir: default_template_dir(),
            recent_window: Duration::hours(24),
            index_limit: None,
        }
    }

    /// Pool bound to a single connection in a rolled back transaction.
    pub fn test_pool() -> PgPool {
        dotenv().ok();
        db::new_test_pool().expect("DATABASE_URL must be set")
    }

    /// Create a question published the given number of days offset from now
    /// (negative for questions already published, positive for questions that
    /// have yet to be published).
    pub fn create_question(pool: &PgPool, question_text: &str, days: i64) -> Question {
        let conn = get_conn(pool).unwrap();
        Question::create(
            &conn,
            question_text.to_string(),
            Utc::now() + Duration::days(days),
        )
        .unwrap()
    }

    pub async fn call(pool: &PgPool, req: test::TestRequest) -> ServiceResponse {
        call_with_settings(pool, test_settings(), req).await
    }

    pub async fn call_with_settings(
        pool: &PgPool,
        settings: Settings,
        req: test::TestRequest,
    ) -> ServiceResponse {
        let tera = new_engine(&settings.template_dir).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool.clone()))
                .app_data(Data::new(tera))
                .app_data(Data::new(settings))
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await;

        test::call_service(&app, req.to_request()).await
    }

    /// Helper for HTTP GET integration tests returning the page body
    pub async fn test_get(pool: &PgPool, route: &str) -> (u16, String) {
        let res = call(pool, test::TestRequest::get().uri(route)).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let body = String::from_utf8(body.to_vec())
            .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string());

        (status, body)
    }

    /// Helper for HTTP GET integration tests on JSON routes
    pub async fn test_get_json<R>(pool: &PgPool, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let res = call(pool, test::TestRequest::get().uri(route)).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Helper for form POST integration tests. Returns the status, the
    /// `Location` header if any, and the body.
    pub async fn test_post_form<T: Serialize>(
        pool: &PgPool,
        route: &str,
        params: T,
    ) -> (u16, Option<String>, String) {
        let res = call(pool, test::TestRequest::post().uri(route).set_form(&params)).await;

        let status = res.status().as_u16();
        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let body = test::read_body(res).await;
        let body = String::from_utf8(body.to_vec())
            .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string());

        (status, location, body)
    }
}
