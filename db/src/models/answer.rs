use chrono::{DateTime, Utc};
use diesel::{self, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::answers::{self, table};

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
pub struct Answer {
    pub id: i32,
    pub question_id: i32,
    pub user_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Insertable)]
#[table_name = "answers"]
pub struct NewAnswer {
    pub question_id: i32,
    pub user_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Answer {
    pub fn create(conn: &PgConnection, new_answer: NewAnswer) -> Result<Answer, Error> {
        let answer = diesel::insert_into(table)
            .values(new_answer)
            .get_result(conn)?;

        Ok(answer)
    }

    pub fn find_by_id(conn: &PgConnection, answer_id: i32) -> Result<Answer, Error> {
        let answer = table.find(answer_id).first::<Answer>(conn)?;

        Ok(answer)
    }

    pub fn find_by_question_id(
        conn: &PgConnection,
        question_id: i32,
    ) -> Result<Vec<Answer>, Error> {
        use answers::dsl::{answers as answers_table, id, question_id as question_id_field};

        let results = answers_table
            .filter(question_id_field.eq(question_id))
            .order(id)
            .get_results(conn)?;

        Ok(results)
    }

    pub fn delete(conn: &PgConnection, answer_id: i32) -> Result<usize, Error> {
        let count = diesel::delete(table.find(answer_id)).execute(conn)?;

        Ok(count)
    }
}
