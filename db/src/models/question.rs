use chrono::{DateTime, Duration, Utc};
use diesel::{ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions;

/// Width of the "recently published" window when none is configured.
pub const DEFAULT_RECENT_WINDOW_HOURS: i64 = 24;

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now(), Duration::hours(DEFAULT_RECENT_WINDOW_HOURS))
    }

    /// True when `pub_date` lies in `[now - window, now]`. A window reaching
    /// past the earliest representable date covers everything up to `now`.
    pub fn was_published_recently_at(&self, now: DateTime<Utc>, window: Duration) -> bool {
        let since_start = match now.checked_sub_signed(window) {
            Some(start) => start <= self.pub_date,
            None => true,
        };
        since_start && self.is_published_at(now)
    }

    pub fn is_published_at(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    pub fn create(
        conn: &PgConnection,
        question_text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = diesel::insert_into(questions::table)
            .values(NewQuestion {
                question_text,
                pub_date,
            })
            .get_result(conn)?;

        Ok(question)
    }

    /// Questions published at or before `now`, newest first. Every one of them
    /// unless a `limit` is given.
    pub fn find_latest_published(
        conn: &PgConnection,
        now: DateTime<Utc>,
        limit: Option<i64>,
    ) -> Result<Vec<Question>, Error> {
        use questions::dsl::{pub_date, questions as questions_table};

        let mut query = questions_table
            .filter(pub_date.le(now))
            .order(pub_date.desc())
            .into_boxed();
        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let results = query.load::<Question>(conn)?;

        Ok(results)
    }

    pub fn find_published_by_id(
        conn: &PgConnection,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Question, Error> {
        use questions::dsl::{id, pub_date, questions as questions_table};

        let question = questions_table
            .filter(id.eq(question_id))
            .filter(pub_date.le(now))
            .first::<Question>(conn)
            .map_err(|err| match err {
                diesel::result::Error::NotFound => {
                    Error::NotFound(format!("No question found with id {}", question_id))
                }
                err => err.into(),
            })?;

        Ok(question)
    }
}
