//! Storage operations the service layer is written against.
//!
//! `PgRepository` is the production implementation. `MemoryRepository` keeps
//! everything in process and is used wherever a database is not available,
//! such as the handler and service tests.

use std::sync::Arc;

use errors::Error;

use crate::models::{Answer, NewAnswer, NewQuestion, Question, QuestionDetails};

mod memory;
mod postgres;

pub use self::memory::MemoryRepository;
pub use self::postgres::PgRepository;

pub trait Repository: Send + Sync {
    fn list_questions(&self) -> Result<Vec<Question>, Error>;

    /// Fails with `Error::NotFound` when there is no question with `id`.
    fn get_question(&self, id: i32) -> Result<QuestionDetails, Error>;

    fn question_exists(&self, id: i32) -> Result<bool, Error>;

    fn create_question(&self, new_question: NewQuestion) -> Result<Question, Error>;

    /// Removes the question and every answer attached to it.
    fn delete_question(&self, id: i32) -> Result<(), Error>;

    /// Fails with `Error::NotFound` when `new_answer.question_id` does not
    /// reference an existing question.
    fn create_answer(&self, new_answer: NewAnswer) -> Result<Answer, Error>;

    fn get_answer(&self, id: i32) -> Result<Answer, Error>;

    fn list_answers_by_question(&self, question_id: i32) -> Result<Vec<Answer>, Error>;

    fn delete_answer(&self, id: i32) -> Result<(), Error>;
}

impl<R: Repository + ?Sized> Repository for Arc<R> {
    fn list_questions(&self) -> Result<Vec<Question>, Error> {
        (**self).list_questions()
    }

    fn get_question(&self, id: i32) -> Result<QuestionDetails, Error> {
        (**self).get_question(id)
    }

    fn question_exists(&self, id: i32) -> Result<bool, Error> {
        (**self).question_exists(id)
    }

    fn create_question(&self, new_question: NewQuestion) -> Result<Question, Error> {
        (**self).create_question(new_question)
    }

    fn delete_question(&self, id: i32) -> Result<(), Error> {
        (**self).delete_question(id)
    }

    fn create_answer(&self, new_answer: NewAnswer) -> Result<Answer, Error> {
        (**self).create_answer(new_answer)
    }

    fn get_answer(&self, id: i32) -> Result<Answer, Error> {
        (**self).get_answer(id)
    }

    fn list_answers_by_question(&self, question_id: i32) -> Result<Vec<Answer>, Error> {
        (**self).list_answers_by_question(question_id)
    }

    fn delete_answer(&self, id: i32) -> Result<(), Error> {
        (**self).delete_answer(id)
    }
}

fn not_found() -> Error {
    Error::NotFound("Record not found".into())
}
