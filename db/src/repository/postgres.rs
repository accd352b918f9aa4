use diesel::Connection as _;

use errors::Error;

use super::{not_found, Repository};
use crate::models::{Answer, NewAnswer, NewQuestion, Question, QuestionDetails};
use crate::{get_conn, Connection, PgPool};

#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        PgRepository { pool }
    }

    fn conn(&self) -> Result<Connection, Error> {
        let conn = get_conn(&self.pool)?;
        Ok(conn)
    }
}

impl Repository for PgRepository {
    fn list_questions(&self) -> Result<Vec<Question>, Error> {
        let conn = self.conn()?;
        Question::get_all(&conn)
    }

    fn get_question(&self, id: i32) -> Result<QuestionDetails, Error> {
        let conn = self.conn()?;
        let question = Question::find_by_id(&conn, id)?;
        let answers = Answer::find_by_question_id(&conn, question.id)?;

        Ok(QuestionDetails::new(question, answers))
    }

    fn question_exists(&self, id: i32) -> Result<bool, Error> {
        let conn = self.conn()?;
        Question::exists(&conn, id)
    }

    fn create_question(&self, new_question: NewQuestion) -> Result<Question, Error> {
        let conn = self.conn()?;
        Question::create(&conn, new_question)
    }

    fn delete_question(&self, id: i32) -> Result<(), Error> {
        let conn = self.conn()?;
        match Question::delete(&conn, id)? {
            0 => Err(not_found()),
            _ => Ok(()),
        }
    }

    fn create_answer(&self, new_answer: NewAnswer) -> Result<Answer, Error> {
        let conn = self.conn()?;

        // The read does not lock the question row. A concurrent delete is
        // still caught by the foreign key, which maps to NotFound as well.
        conn.transaction::<_, Error, _>(|| {
            if !Question::exists(&conn, new_answer.question_id)? {
                return Err(not_found());
            }
            Answer::create(&conn, new_answer)
        })
    }

    fn get_answer(&self, id: i32) -> Result<Answer, Error> {
        let conn = self.conn()?;
        Answer::find_by_id(&conn, id)
    }

    fn list_answers_by_question(&self, question_id: i32) -> Result<Vec<Answer>, Error> {
        let conn = self.conn()?;
        Answer::find_by_question_id(&conn, question_id)
    }

    fn delete_answer(&self, id: i32) -> Result<(), Error> {
        let conn = self.conn()?;
        match Answer::delete(&conn, id)? {
            0 => Err(not_found()),
            _ => Ok(()),
        }
    }
}
