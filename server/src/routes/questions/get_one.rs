use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};

use db::models::QuestionDetails;
use errors::Error;

use crate::state::AppState;

pub async fn get_one(
    state: Data<AppState>,
    question_id: Path<i32>,
) -> Result<Json<QuestionDetails>, Error> {
    let service = state.service()?;
    let question_id = question_id.into_inner();

    let question = block(move || service.get_question(question_id)).await??;

    Ok(Json(question))
}
