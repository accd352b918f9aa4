use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use errors::Error;

use super::{not_found, Repository};
use crate::models::{Answer, NewAnswer, NewQuestion, Question, QuestionDetails};

#[derive(Default)]
struct Tables {
    questions: BTreeMap<i32, Question>,
    answers: BTreeMap<i32, Answer>,
    last_question_id: i32,
    last_answer_id: i32,
}

/// Keeps questions and answers behind a single lock, so a question and its
/// answers are always removed together.
#[derive(Default)]
pub struct MemoryRepository {
    tables: Mutex<Tables>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        MemoryRepository::default()
    }

    fn tables(&self) -> Result<MutexGuard<Tables>, Error> {
        self.tables.lock().map_err(|err| {
            error!("Memory repository lock poisoned - {}", err.to_string());
            Error::InternalServerError("Repository unavailable".into())
        })
    }
}

impl Tables {
    fn answers_for(&self, question_id: i32) -> Vec<Answer> {
        self.answers
            .values()
            .filter(|answer| answer.question_id == question_id)
            .cloned()
            .collect()
    }
}

impl Repository for MemoryRepository {
    fn list_questions(&self) -> Result<Vec<Question>, Error> {
        let tables = self.tables()?;
        Ok(tables.questions.values().cloned().collect())
    }

    fn get_question(&self, id: i32) -> Result<QuestionDetails, Error> {
        let tables = self.tables()?;
        let question = tables.questions.get(&id).cloned().ok_or_else(not_found)?;
        let answers = tables.answers_for(id);

        Ok(QuestionDetails::new(question, answers))
    }

    fn question_exists(&self, id: i32) -> Result<bool, Error> {
        let tables = self.tables()?;
        Ok(tables.questions.contains_key(&id))
    }

    fn create_question(&self, new_question: NewQuestion) -> Result<Question, Error> {
        let mut tables = self.tables()?;
        tables.last_question_id += 1;

        let question = Question {
            id: tables.last_question_id,
            text: new_question.text,
            created_at: new_question.created_at,
        };
        tables.questions.insert(question.id, question.clone());

        Ok(question)
    }

    fn delete_question(&self, id: i32) -> Result<(), Error> {
        let mut tables = self.tables()?;
        tables.questions.remove(&id).ok_or_else(not_found)?;
        tables.answers.retain(|_, answer| answer.question_id != id);

        Ok(())
    }

    fn create_answer(&self, new_answer: NewAnswer) -> Result<Answer, Error> {
        let mut tables = self.tables()?;
        if !tables.questions.contains_key(&new_answer.question_id) {
            return Err(not_found());
        }
        tables.last_answer_id += 1;

        let answer = Answer {
            id: tables.last_answer_id,
            question_id: new_answer.question_id,
            user_id: new_answer.user_id,
            text: new_answer.text,
            created_at: new_answer.created_at,
        };
        tables.answers.insert(answer.id, answer.clone());

        Ok(answer)
    }

    fn get_answer(&self, id: i32) -> Result<Answer, Error> {
        let tables = self.tables()?;
        tables.answers.get(&id).cloned().ok_or_else(not_found)
    }

    fn list_answers_by_question(&self, question_id: i32) -> Result<Vec<Answer>, Error> {
        let tables = self.tables()?;
        Ok(tables.answers_for(question_id))
    }

    fn delete_answer(&self, id: i32) -> Result<(), Error> {
        let mut tables = self.tables()?;
        tables.answers.remove(&id).ok_or_else(not_found)?;

        Ok(())
    }
}
