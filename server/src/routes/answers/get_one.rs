use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};

use db::models::Answer;
use errors::Error;

use crate::state::AppState;

pub async fn get_one(state: Data<AppState>, answer_id: Path<i32>) -> Result<Json<Answer>, Error> {
    let service = state.service()?;
    let answer_id = answer_id.into_inner();

    let answer = block(move || service.get_answer(answer_id)).await??;

    Ok(Json(answer))
}
