use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::goal::errors::GoalError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_json, repository_status};

impl IntoErrorResponse for GoalError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            GoalError::NameEmpty => (StatusCode::BAD_REQUEST, "ValidationError", "goal.name_empty"),
            GoalError::TargetAmountZero => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "goal.target_amount_zero",
            ),
            GoalError::TargetAmountTooLarge => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "goal.target_amount_too_large",
            ),
            GoalError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "goal.not_found"),
            GoalError::Repository(err) => repository_status(err),
        };

        error_json(status, name, message)
    }
}
