use chrono::Utc;

use db::{
    models::{Answer, NewAnswer, NewQuestion, Question, QuestionDetails},
    repository::Repository,
};
use errors::Error;

/// Use cases exposed to the HTTP handlers. All calls block on storage, so
/// handlers run them through `web::block`.
pub trait QnaService: Send + Sync {
    fn list_questions(&self) -> Result<Vec<Question>, Error>;
    fn get_question(&self, id: i32) -> Result<QuestionDetails, Error>;
    fn create_question(&self, text: String) -> Result<Question, Error>;
    fn delete_question(&self, id: i32) -> Result<(), Error>;
    fn create_answer(
        &self,
        question_id: i32,
        user_id: String,
        text: String,
    ) -> Result<Answer, Error>;
    fn get_answer(&self, id: i32) -> Result<Answer, Error>;
    fn delete_answer(&self, id: i32) -> Result<(), Error>;
}

pub struct RepositoryService<R> {
    repo: R,
}

impl<R: Repository> RepositoryService<R> {
    pub fn new(repo: R) -> Self {
        RepositoryService { repo }
    }
}

fn question_not_found(err: Error) -> Error {
    match err {
        Error::NotFound(_) => Error::NotFound("Question not found".into()),
        _ => err,
    }
}

fn answer_not_found(err: Error) -> Error {
    match err {
        Error::NotFound(_) => Error::NotFound("Answer not found".into()),
        _ => err,
    }
}

impl<R: Repository> QnaService for RepositoryService<R> {
    fn list_questions(&self) -> Result<Vec<Question>, Error> {
        self.repo.list_questions()
    }

    fn get_question(&self, id: i32) -> Result<QuestionDetails, Error> {
        self.repo.get_question(id).map_err(question_not_found)
    }

    fn create_question(&self, text: String) -> Result<Question, Error> {
        let question = self.repo.create_question(NewQuestion {
            text,
            created_at: Utc::now(),
        })?;
        info!("Created question {}", question.id);

        Ok(question)
    }

    fn delete_question(&self, id: i32) -> Result<(), Error> {
        self.repo.delete_question(id).map_err(question_not_found)?;
        info!("Deleted question {}", id);

        Ok(())
    }

    fn create_answer(
        &self,
        question_id: i32,
        user_id: String,
        text: String,
    ) -> Result<Answer, Error> {
        if !self.repo.question_exists(question_id)? {
            return Err(Error::NotFound("Question not found".into()));
        }

        // a question deleted after the check surfaces as NotFound from the insert
        let answer = self
            .repo
            .create_answer(NewAnswer {
                question_id,
                user_id,
                text,
                created_at: Utc::now(),
            })
            .map_err(question_not_found)?;
        info!("Created answer {} for question {}", answer.id, question_id);

        Ok(answer)
    }

    fn get_answer(&self, id: i32) -> Result<Answer, Error> {
        self.repo.get_answer(id).map_err(answer_not_found)
    }

    fn delete_answer(&self, id: i32) -> Result<(), Error> {
        self.repo.delete_answer(id).map_err(answer_not_found)?;
        info!("Deleted answer {}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use db::repository::{MemoryRepository, Repository};
    use errors::Error;

    use super::{QnaService, RepositoryService};

    fn service() -> (Arc<MemoryRepository>, RepositoryService<Arc<MemoryRepository>>) {
        let repo = Arc::new(MemoryRepository::new());
        (repo.clone(), RepositoryService::new(repo))
    }

    #[test]
    fn test_create_question_stamps_created_at() {
        let (_, service) = service();

        let before = Utc::now();
        let question = service.create_question("Test question".into()).unwrap();
        let after = Utc::now();

        assert!(question.id > 0);
        assert_eq!(question.text, "Test question");
        assert!(question.created_at >= before && question.created_at <= after);
    }

    #[test]
    fn test_list_questions() {
        let (_, service) = service();
        service.create_question("Question 1".into()).unwrap();
        service.create_question("Question 2".into()).unwrap();

        let questions = service.list_questions().unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text, "Question 1");
    }

    #[test]
    fn test_create_answer() {
        let (_, service) = service();
        let question = service.create_question("Test question".into()).unwrap();

        let answer = service
            .create_answer(question.id, "user-123".into(), "Test answer".into())
            .unwrap();

        assert_eq!(answer.question_id, question.id);
        assert_eq!(answer.user_id, "user-123");
        assert_eq!(answer.text, "Test answer");
        assert_eq!(service.get_answer(answer.id).unwrap(), answer);
    }

    #[test]
    fn test_create_answer_question_not_found() {
        let (repo, service) = service();

        let result = service.create_answer(999, "user-123".into(), "Test answer".into());

        assert_eq!(result, Err(Error::NotFound("Question not found".into())));
        assert!(repo.list_answers_by_question(999).unwrap().is_empty());
    }

    #[test]
    fn test_missing_records_have_specific_messages() {
        let (_, service) = service();

        assert_eq!(
            service.get_question(1),
            Err(Error::NotFound("Question not found".into()))
        );
        assert_eq!(
            service.delete_question(1),
            Err(Error::NotFound("Question not found".into()))
        );
        assert_eq!(
            service.get_answer(1),
            Err(Error::NotFound("Answer not found".into()))
        );
        assert_eq!(
            service.delete_answer(1),
            Err(Error::NotFound("Answer not found".into()))
        );
    }

    #[test]
    fn test_delete_question_removes_answers() {
        let (repo, service) = service();
        let question = service.create_question("Test question".into()).unwrap();
        let answer = service
            .create_answer(question.id, "user-123".into(), "Test answer".into())
            .unwrap();

        service.delete_question(question.id).unwrap();

        assert!(repo.list_answers_by_question(question.id).unwrap().is_empty());
        assert_eq!(
            service.get_answer(answer.id),
            Err(Error::NotFound("Answer not found".into()))
        );
    }

    #[test]
    fn test_delete_answer() {
        let (_, service) = service();
        let question = service.create_question("Test question".into()).unwrap();
        let answer = service
            .create_answer(question.id, "user-123".into(), "Test answer".into())
            .unwrap();

        service.delete_answer(answer.id).unwrap();

        assert!(service.get_question(question.id).unwrap().answers.is_empty());
    }
}
