use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::errors::RepositoryError;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Shared mapping for store failures wrapped by every area error.
///
/// A malformed ObjectId in a path or reference is the caller's fault; everything
/// else the store reports is ours.
pub fn repository_status(err: &RepositoryError) -> (StatusCode, &'static str, &'static str) {
    match err {
        RepositoryError::InvalidId => (
            StatusCode::BAD_REQUEST,
            "ValidationError",
            "repository.invalid_id",
        ),
        RepositoryError::Serialization | RepositoryError::DatabaseError => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "InternalError",
            "repository.persistence",
        ),
    }
}

pub fn error_json(
    status: StatusCode,
    name: &str,
    message: &str,
) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse::new(name, message)))
}
