use actix_web::{
    web::{block, Data, Json, Path},
    HttpResponse, Result,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use errors::Error;

use crate::state::AppState;
use crate::validate::validate;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateAnswerRequest {
    #[serde(default)]
    #[validate(length(
        min = "1",
        max = "36",
        message = "User ID is required and must be at most 36 characters"
    ))]
    pub user_id: String,
    #[serde(default)]
    #[validate(length(min = "1", message = "Answer text is required"))]
    pub text: String,
}

pub async fn create(
    state: Data<AppState>,
    question_id: Path<i32>,
    params: Json<CreateAnswerRequest>,
) -> Result<HttpResponse, Error> {
    let service = state.service()?;
    validate(&params)?;

    let question_id = question_id.into_inner();
    let CreateAnswerRequest { user_id, text } = params.into_inner();
    let answer = block(move || service.create_answer(question_id, user_id, text)).await??;

    Ok(HttpResponse::Created().json(answer))
}
