#[macro_use]
extern crate log;

use actix_web::{error::BlockingError, error::ResponseError, http::StatusCode, HttpResponse};
use derive_more::Display;
use diesel::result::{DatabaseErrorKind, Error as DBError};
use r2d2::Error as PoolError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, PartialEq)]
pub enum Error {
    BadRequest(String),
    InternalServerError(String),
    NotFound(String),
    PoolError(String),
    #[display(fmt = "validation failed")]
    ValidationError(Vec<String>),
    BlockingError(String),
    ServiceUnavailable(String),
}

// User-friendly error messages
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::ValidationError(_) | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Error::ValidationError(ref validation_errors) => {
                HttpResponse::BadRequest().json(ErrorResponse::from(validation_errors.to_vec()))
            }
            Error::BadRequest(error) => HttpResponse::BadRequest().json(ErrorResponse::from(error)),
            Error::NotFound(message) => HttpResponse::NotFound().json(ErrorResponse::from(message)),
            Error::ServiceUnavailable(message) => {
                HttpResponse::ServiceUnavailable().json(ErrorResponse::from(message))
            }
            _ => {
                error!("Request failed - {}", self);
                HttpResponse::InternalServerError()
                    .json(ErrorResponse::from("Internal server error"))
            }
        }
    }
}

impl From<&str> for ErrorResponse {
    fn from(error: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
        }
    }
}

impl From<&String> for ErrorResponse {
    fn from(error: &String) -> Self {
        ErrorResponse {
            error: error.into(),
        }
    }
}

impl From<Vec<String>> for ErrorResponse {
    fn from(errors: Vec<String>) -> Self {
        ErrorResponse {
            error: errors.join(", "),
        }
    }
}

// Convert DBErrors to our Error type
impl From<DBError> for Error {
    fn from(error: DBError) -> Error {
        match error {
            DBError::DatabaseError(kind, info) => match kind {
                // the only foreign keys point at parent records
                DatabaseErrorKind::ForeignKeyViolation => {
                    Error::NotFound("Referenced record not found".into())
                }
                _ => {
                    error!("Database error - {}", info.message());
                    Error::InternalServerError("Unknown database error".into())
                }
            },
            DBError::NotFound => Error::NotFound("Record not found".into()),
            err => {
                error!("Database error - {}", err);
                Error::InternalServerError("Unknown database error".into())
            }
        }
    }
}

// Convert PoolError to our Error type
impl From<PoolError> for Error {
    fn from(error: PoolError) -> Error {
        Error::PoolError(error.to_string())
    }
}

impl From<BlockingError> for Error {
    fn from(_: BlockingError) -> Error {
        Error::BlockingError("Thread blocking error".into())
    }
}
