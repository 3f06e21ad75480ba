use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("Reminder not found")]
    ReminderNotFound,

    #[error("No reminders found")]
    NoReminders,

    #[error("No completed reminders found")]
    NoCompletedReminders,

    #[error("No not-completed reminders found")]
    NoNotCompletedReminders,

    #[error("No reminders due today")]
    NoRemindersDueToday,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        log::debug!("rejected request: {self}");
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Turns body extraction failures into a JSON 400 instead of actix's plain
/// text default.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::InvalidJson(err.to_string()).into()
}
