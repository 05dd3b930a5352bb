use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::collections::BTreeMap;
use std::fmt;

/// Field name -> message, as produced by the validation rules
pub type FieldErrors = BTreeMap<&'static str, String>;

#[derive(Debug)]
pub enum AppError {
    Validation(FieldErrors),
    Conflict(String),
    NotFound(String),
    InvalidRequest(String),
    DatabaseError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => {
                let fields: Vec<&str> = errors.keys().copied().collect();
                write!(f, "Validation failed: {}", fields.join(", "))
            }
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            // Duplicate email is reported as 400 so clients can match on the message
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(errors) => serde_json::json!({
                "message": "Validation failed",
                "errors": errors,
            }),
            AppError::Conflict(msg) | AppError::NotFound(msg) | AppError::InvalidRequest(msg) => {
                serde_json::json!({ "message": msg })
            }
            // Do not leak driver details to clients
            AppError::DatabaseError(_) => serde_json::json!({ "message": "Internal server error" }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
