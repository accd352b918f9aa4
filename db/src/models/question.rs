use chrono::{DateTime, Utc};
use diesel::{self, dsl::exists, select, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Answer;
use crate::schema::questions::{self, table};

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A question together with its answers, oldest answer first.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct QuestionDetails {
    pub id: i32,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub answers: Vec<Answer>,
}

impl QuestionDetails {
    pub fn new(question: Question, answers: Vec<Answer>) -> Self {
        QuestionDetails {
            id: question.id,
            text: question.text,
            created_at: question.created_at,
            answers,
        }
    }
}

impl Question {
    pub fn get_all(conn: &PgConnection) -> Result<Vec<Question>, Error> {
        use questions::dsl::{id, questions as questions_table};

        let all_questions = questions_table.order(id).load::<Question>(conn)?;

        Ok(all_questions)
    }

    pub fn find_by_id(conn: &PgConnection, question_id: i32) -> Result<Question, Error> {
        let question = table.find(question_id).first::<Question>(conn)?;

        Ok(question)
    }

    pub fn exists(conn: &PgConnection, question_id: i32) -> Result<bool, Error> {
        let found = select(exists(table.find(question_id))).get_result::<bool>(conn)?;

        Ok(found)
    }

    pub fn create(conn: &PgConnection, new_question: NewQuestion) -> Result<Question, Error> {
        let question = diesel::insert_into(table)
            .values(new_question)
            .get_result(conn)?;

        Ok(question)
    }

    /// Answers go with it through `ON DELETE CASCADE`. Returns the number of
    /// deleted questions.
    pub fn delete(conn: &PgConnection, question_id: i32) -> Result<usize, Error> {
        let count = diesel::delete(table.find(question_id)).execute(conn)?;

        Ok(count)
    }
}
