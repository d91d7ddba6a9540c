use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::tag::errors::TagError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_json, repository_status};

impl IntoErrorResponse for TagError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            TagError::NameEmpty => (StatusCode::BAD_REQUEST, "ValidationError", "tag.name_empty"),
            TagError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "tag.not_found"),
            TagError::Repository(err) => repository_status(err),
        };

        error_json(status, name, message)
    }
}
