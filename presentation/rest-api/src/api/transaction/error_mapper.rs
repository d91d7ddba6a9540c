use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::transaction::errors::TransactionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_json, repository_status};

impl IntoErrorResponse for TransactionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            TransactionError::AmountInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "transaction.amount_invalid",
            ),
            TransactionError::NotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "transaction.not_found")
            }
            TransactionError::Repository(err) => repository_status(err),
        };

        error_json(status, name, message)
    }
}
