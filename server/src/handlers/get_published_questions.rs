use actix_web::web::{block, Data};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Question, PgPool};
use errors::Error;

use crate::settings::Settings;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct QuestionSummary {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub was_published_recently: bool,
}

impl QuestionSummary {
    pub fn new(question: Question, now: DateTime<Utc>, recent_window: Duration) -> Self {
        QuestionSummary {
            was_published_recently: question.was_published_recently_at(now, recent_window),
            id: question.id,
            question_text: question.question_text,
            pub_date: question.pub_date,
        }
    }
}

/// The newest questions whose publication date has been reached.
pub async fn get_published_questions(
    pool: Data<PgPool>,
    settings: &Settings,
) -> Result<Vec<QuestionSummary>, Error> {
    let now = Utc::now();
    let limit = settings.index_limit;

    let questions: Result<Vec<Question>, Error> = block(move || {
        let connection = get_conn(&pool)?;
        Question::find_latest_published(&connection, now, limit)
    })
    .await?;

    Ok(questions?
        .into_iter()
        .map(|question| QuestionSummary::new(question, now, settings.recent_window))
        .collect())
}
