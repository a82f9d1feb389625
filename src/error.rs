use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Every failure a user action can surface. All of these are recovered at
/// the call site and rendered as a one-shot JSON notification; none are
/// fatal to the process.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Email already registered")]
    DuplicateEmail,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Already checked in today")]
    DuplicateCheckIn,
    #[error("No active check-in found for today")]
    InvalidCheckoutState,
    #[error("Leave request not found or already processed")]
    InvalidStateTransition,
    #[error("{0} must not be empty")]
    MissingRequiredField(&'static str),
    #[error("Employee not found")]
    EmployeeNotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::DuplicateEmail => StatusCode::CONFLICT,
            ServiceError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ServiceError::DuplicateCheckIn
            | ServiceError::InvalidCheckoutState
            | ServiceError::InvalidStateTransition
            | ServiceError::MissingRequiredField(_) => StatusCode::BAD_REQUEST,
            ServiceError::EmployeeNotFound => StatusCode::NOT_FOUND,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ServiceError::Store(e) => {
                error!(error = ?e, "storage failure");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}
