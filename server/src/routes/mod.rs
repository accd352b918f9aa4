use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use errors::{Error, ErrorResponse};

pub mod answers;
pub mod questions;
pub mod status;

#[derive(Debug, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(path_config())
        .app_data(json_config())
        .route("/", web::get().to(status::index))
        .route("/health", web::get().to(status::health))
        .service(
            web::scope("/questions")
                .route("", web::get().to(questions::get_all))
                .route("", web::post().to(questions::create))
                .route("/{id}", web::get().to(questions::get_one))
                .route("/{id}", web::delete().to(questions::delete))
                .route("/{id}/answers", web::post().to(answers::create)),
        )
        .service(
            web::scope("/answers")
                .route("/{id}", web::get().to(answers::get_one))
                .route("/{id}", web::delete().to(answers::delete)),
        );
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}

fn invalid_id(req: &HttpRequest) -> Error {
    let entity = if req.path().starts_with("/answers") {
        "answer"
    } else {
        "question"
    };
    Error::BadRequest(format!("Invalid {} ID", entity))
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        debug!("Rejected path {} - {}", req.path(), err);
        invalid_id(req).into()
    })
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        debug!("Rejected body for {} - {}", req.path(), err);
        Error::BadRequest("Invalid request body".into()).into()
    })
}
