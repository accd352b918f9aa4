use actix_web::{
    web::{block, Data, Json},
    HttpResponse, Result,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use errors::Error;

use crate::state::AppState;
use crate::validate::validate;

/// Anything besides `text`, such as a client supplied `id` or `created_at`,
/// is ignored.
#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    #[validate(length(min = "1", message = "Question text is required"))]
    pub text: String,
}

pub async fn create(
    state: Data<AppState>,
    params: Json<CreateQuestionRequest>,
) -> Result<HttpResponse, Error> {
    let service = state.service()?;
    validate(&params)?;

    let text = params.into_inner().text;
    let question = block(move || service.create_question(text)).await??;

    Ok(HttpResponse::Created().json(question))
}
