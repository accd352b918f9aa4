use actix_web::{
    web::{block, Data, Path},
    HttpResponse, Result,
};

use errors::Error;

use crate::routes::MessageResponse;
use crate::state::AppState;

pub async fn delete(state: Data<AppState>, question_id: Path<i32>) -> Result<HttpResponse, Error> {
    let service = state.service()?;
    let question_id = question_id.into_inner();

    block(move || service.delete_question(question_id)).await??;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Question deleted successfully".to_string(),
    }))
}
