use actix_web::{
    web::{block, Data, Path},
    HttpResponse, Result,
};

use errors::Error;

use crate::routes::MessageResponse;
use crate::state::AppState;

pub async fn delete(state: Data<AppState>, answer_id: Path<i32>) -> Result<HttpResponse, Error> {
    let service = state.service()?;
    let answer_id = answer_id.into_inner();

    block(move || service.delete_answer(answer_id)).await??;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Answer deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use db::models::{Answer, Question, QuestionDetails};
    use errors::ErrorResponse;
    use serde_json::json;

    use crate::routes::MessageResponse;
    use crate::tests::helpers::tests::{get_state, test_delete, test_get, test_post};

    #[actix_rt::test]
    async fn test_delete_answer() {
        let state = get_state();
        let question: (u16, Question) =
            test_post(&state, "/questions", json!({ "text": "Who to win" })).await;
        let answer: (u16, Answer) = test_post(
            &state,
            &format!("/questions/{}/answers", question.1.id),
            json!({ "user_id": "user-123", "text": "Maru" }),
        )
        .await;

        let res: (u16, MessageResponse) =
            test_delete(&state, &format!("/answers/{}", answer.1.id)).await;
        assert_eq!(res.0, 200);
        assert_eq!(res.1.message, "Answer deleted successfully");

        let res: (u16, ErrorResponse) =
            test_get(&state, &format!("/answers/{}", answer.1.id)).await;
        assert_eq!(res.0, 404);

        // the question itself is untouched
        let res: (u16, QuestionDetails) =
            test_get(&state, &format!("/questions/{}", question.1.id)).await;
        assert_eq!(res.0, 200);
        assert!(res.1.answers.is_empty());
    }

    #[actix_rt::test]
    async fn test_delete_answer_not_found() {
        let res: (u16, ErrorResponse) = test_delete(&get_state(), "/answers/999").await;
        assert_eq!(res.0, 404);
        assert_eq!(res.1.error, "Answer not found");
    }

    #[actix_rt::test]
    async fn test_delete_answer_invalid_id() {
        let res: (u16, ErrorResponse) = test_delete(&get_state(), "/answers/-").await;
        assert_eq!(res.0, 400);
        assert_eq!(res.1.error, "Invalid answer ID");
    }
}
