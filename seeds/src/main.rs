#[macro_use]
extern crate log;

use std::env;

use chrono::{Duration, Utc};
use diesel::Connection;
use dotenv::dotenv;

use db::{
    get_conn,
    models::{Choice, Question},
    new_pool,
};
use errors::Error;

// (question, days since publication, choices)
const QUESTIONS: &[(&str, i64, &[&str])] = &[
    (
        "What's your favourite language?",
        3,
        &["Rust", "Python", "Go"],
    ),
    ("What's up?", 0, &["Not much", "The sky"]),
    (
        "Who is the best course director?",
        10,
        &["Freddy", "Facundo", "Anyone else"],
    ),
    // still unpublished, stays hidden until then
    ("Tabs or spaces?", -7, &["Tabs", "Spaces"]),
];

fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::init();

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| Error::InternalServerError("DATABASE_URL must be set".into()))?;
    let pool = new_pool(&database_url)?;
    let conn = get_conn(&pool)?;

    conn.transaction::<_, Error, _>(|| {
        for (question_text, days_ago, choices) in QUESTIONS {
            let question = Question::create(
                &conn,
                question_text.to_string(),
                Utc::now() - Duration::days(*days_ago),
            )?;
            for choice_text in choices.iter() {
                Choice::create(&conn, question.id, choice_text.to_string())?;
            }
            info!("Seeded question {} - {}", question.id, question.question_text);
        }

        Ok(())
    })
}
