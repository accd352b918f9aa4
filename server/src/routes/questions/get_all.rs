use actix_web::{
    web::{block, Data, Json},
    Result,
};

use db::models::Question;
use errors::Error;

use crate::state::AppState;

pub async fn get_all(state: Data<AppState>) -> Result<Json<Vec<Question>>, Error> {
    let service = state.service()?;

    let questions = block(move || service.list_questions()).await??;

    Ok(Json(questions))
}
