#[cfg(test)]
pub mod tests {
    use std::sync::Arc;

    use actix_web::{http::header::ContentType, test, web::Data, App};
    use serde::{de::DeserializeOwned, Serialize};

    use db::{
        models::{Answer, Question, QuestionDetails},
        repository::MemoryRepository,
    };
    use errors::Error;

    use crate::routes::routes;
    use crate::service::{QnaService, RepositoryService};
    use crate::state::AppState;

    /// Fails every call the way an unreachable database would.
    pub struct BrokenService;

    fn store_error<T>() -> Result<T, Error> {
        Err(Error::InternalServerError("Unknown database error".into()))
    }

    impl QnaService for BrokenService {
        fn list_questions(&self) -> Result<Vec<Question>, Error> {
            store_error()
        }

        fn get_question(&self, _: i32) -> Result<QuestionDetails, Error> {
            store_error()
        }

        fn create_question(&self, _: String) -> Result<Question, Error> {
            store_error()
        }

        fn delete_question(&self, _: i32) -> Result<(), Error> {
            store_error()
        }

        fn create_answer(&self, _: i32, _: String, _: String) -> Result<Answer, Error> {
            store_error()
        }

        fn get_answer(&self, _: i32) -> Result<Answer, Error> {
            store_error()
        }

        fn delete_answer(&self, _: i32) -> Result<(), Error> {
            store_error()
        }
    }

    /// A fresh in-memory store. Clones of the state share it.
    pub fn get_state() -> AppState {
        AppState::new(Arc::new(RepositoryService::new(MemoryRepository::new())))
    }

    async fn send<R>(state: &AppState, req: test::TestRequest) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(state.clone()))
                .configure(routes),
        )
        .await;

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(state: &AppState, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        send(state, test::TestRequest::get().uri(route)).await
    }

    /// Helper for HTTP POST integration tests
    pub async fn test_post<T: Serialize, R>(state: &AppState, route: &str, params: T) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        send(state, test::TestRequest::post().set_json(&params).uri(route)).await
    }

    /// POSTs `body` as-is with a JSON content type
    pub async fn test_post_raw<R>(state: &AppState, route: &str, body: &'static str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let req = test::TestRequest::post()
            .uri(route)
            .insert_header(ContentType::json())
            .set_payload(body);

        send(state, req).await
    }

    /// Helper for HTTP DELETE integration tests
    pub async fn test_delete<R>(state: &AppState, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        send(state, test::TestRequest::delete().uri(route)).await
    }
}
