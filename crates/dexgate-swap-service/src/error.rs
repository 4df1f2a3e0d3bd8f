// ----- standard library imports
// ----- extra library imports
use axum::http::StatusCode;
use axum::Json;
use dexgate_webapi::errors::{
    ErrorReply, GeneralErrorCode, QuoteField, RevertReason, ValidationErrorCode,
    ValidationErrorItem,
};
use itertools::Itertools;
use thiserror::Error;
// ----- local imports

pub type Result<T> = std::result::Result<T, Error>;

/// errors the API hands back to its callers, already classified
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Validation failed on {}", fields_of(.0))]
    Validation(Vec<ValidationErrorItem>),
    #[error("Transaction reverted: {0}")]
    Revert(RevertReason),
    #[error("Internal server error: {0}")]
    InternalServer(String),
}

impl Error {
    pub fn validation(field: QuoteField, code: ValidationErrorCode, reason: impl Into<String>) -> Self {
        Error::Validation(vec![ValidationErrorItem {
            field,
            code,
            reason: reason.into(),
        }])
    }
}

fn fields_of(items: &[ValidationErrorItem]) -> String {
    items.iter().map(|item| item.field).join(", ")
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        tracing::debug!("Error: {self}");
        let (status, reply) = match self {
            Error::Validation(validation_errors) => (
                StatusCode::BAD_REQUEST,
                ErrorReply {
                    code: GeneralErrorCode::ValidationError,
                    reason: String::from("Validation Failed"),
                    validation_errors,
                    values: None,
                },
            ),
            Error::Revert(revert) => (
                StatusCode::BAD_REQUEST,
                ErrorReply {
                    code: GeneralErrorCode::TransactionInvalid,
                    reason: String::from("Transaction Invalid"),
                    validation_errors: Vec::new(),
                    values: Some(revert),
                },
            ),
            // the original message stays in the logs, not on the wire
            Error::InternalServer(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorReply {
                    code: GeneralErrorCode::InternalError,
                    reason: String::from("Internal Server Error"),
                    validation_errors: Vec::new(),
                    values: None,
                },
            ),
        };
        (status, Json(reply)).into_response()
    }
}
