use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::account::errors::AccountError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_json, repository_status};

impl IntoErrorResponse for AccountError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            AccountError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "account.name_empty",
            ),
            AccountError::NumberEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "account.number_empty",
            ),
            AccountError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "account.not_found"),
            AccountError::Repository(err) => repository_status(err),
        };

        error_json(status, name, message)
    }
}
