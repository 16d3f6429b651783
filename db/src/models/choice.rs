use diesel::{self, BelongingToDsl, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Question;
use crate::schema::choices::{self, table};

#[derive(Associations, Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[belongs_to(Question)]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

#[derive(Insertable)]
#[table_name = "choices"]
pub struct NewChoice {
    pub question_id: i32,
    pub choice_text: String,
}

impl Choice {
    pub fn create(
        conn: &PgConnection,
        question_id: i32,
        choice_text: String,
    ) -> Result<Choice, Error> {
        let choice = diesel::insert_into(table)
            .values(NewChoice {
                question_id,
                choice_text,
            })
            .get_result(conn)?;

        Ok(choice)
    }

    pub fn find_by_question(conn: &PgConnection, question: &Question) -> Result<Vec<Choice>, Error> {
        use choices::dsl::id;

        let results = Choice::belonging_to(question)
            .order(id)
            .load::<Choice>(conn)?;

        Ok(results)
    }

    /// Adds one vote, in a single UPDATE so concurrent votes are not lost.
    pub fn vote(conn: &PgConnection, question_id: i32, choice_id: i32) -> Result<Choice, Error> {
        use choices::dsl::{choices as choices_table, id, question_id as question_id_field, votes};

        let choice = diesel::update(
            choices_table
                .filter(id.eq(choice_id))
                .filter(question_id_field.eq(question_id)),
        )
        .set(votes.eq(votes + 1))
        .get_result(conn)?;

        Ok(choice)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::Choice;
    use crate::models::Question;
    use crate::{get_conn, new_test_pool};
    use errors::Error;

    #[test]
    #[ignore = "needs DATABASE_URL"]
    fn test_vote_increments_choice() {
        let pool = new_test_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        let question = Question::create(
            &conn,
            "Favourite race?".to_string(),
            Utc::now() - Duration::days(1),
        )
        .unwrap();
        let zerg = Choice::create(&conn, question.id, "Zerg".to_string()).unwrap();
        let protoss = Choice::create(&conn, question.id, "Protoss".to_string()).unwrap();

        Choice::vote(&conn, question.id, zerg.id).unwrap();
        let zerg = Choice::vote(&conn, question.id, zerg.id).unwrap();
        assert_eq!(zerg.votes, 2);

        let choices = Choice::find_by_question(&conn, &question).unwrap();
        assert_eq!(choices.len(), 2);
        assert_eq!(choices[0].choice_text, "Zerg");
        assert_eq!(choices[0].votes, 2);
        assert_eq!(choices[1], protoss);
    }

    #[test]
    #[ignore = "needs DATABASE_URL"]
    fn test_vote_rejects_choice_from_other_question() {
        let pool = new_test_pool().unwrap();
        let conn = get_conn(&pool).unwrap();
        let pub_date = Utc::now() - Duration::days(1);

        let question = Question::create(&conn, "one".to_string(), pub_date).unwrap();
        let other = Question::create(&conn, "two".to_string(), pub_date).unwrap();
        let choice = Choice::create(&conn, other.id, "nope".to_string()).unwrap();

        assert_eq!(
            Choice::vote(&conn, question.id, choice.id),
            Err(Error::NotFound("Record not found".to_string()))
        );
    }
}
