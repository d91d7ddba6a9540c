use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_json, repository_status};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            UserError::NameEmpty => (StatusCode::BAD_REQUEST, "ValidationError", "user.name_empty"),
            UserError::EmailInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "user.email_invalid",
            ),
            UserError::PasswordEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "user.password_empty",
            ),
            UserError::PasswordHashing => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "user.password_hashing_failed",
            ),
            UserError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "user.not_found"),
            UserError::Repository(err) => repository_status(err),
        };

        error_json(status, name, message)
    }
}
