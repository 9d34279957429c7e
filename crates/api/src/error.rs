//! Handler errors and their `{ success: false, msg, code }` envelope.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::envelope::MessageEnvelope;
use folio_core::error::CoreError;

/// Shown instead of the details of a store failure.
pub const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// The `code` field of an error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Validation,
    BadRequest,
    NotFound,
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Validation => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Internal => "INTERNAL_ERROR",
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::Validation | ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Everything a handler can fail with.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Validation and lookup failures from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store was unreachable or a query failed.
    #[error("Store error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request could not be decoded (bad JSON body, non-numeric id).
    #[error("Malformed request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// The envelope code and the message safe to show a caller. Store
    /// failures are logged here and their details withheld.
    pub fn classify(&self) -> (ErrorCode, String) {
        match self {
            AppError::Core(CoreError::Validation(msg)) => (ErrorCode::Validation, msg.clone()),
            AppError::Core(CoreError::NotFound { entity, id }) => {
                (ErrorCode::NotFound, format!("{entity} {id} not found"))
            }
            AppError::BadRequest(msg) => (ErrorCode::BadRequest, msg.clone()),
            AppError::Database(sqlx::Error::RowNotFound) => {
                (ErrorCode::NotFound, "Record not found".to_string())
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Store operation failed");
                (ErrorCode::Internal, INTERNAL_MESSAGE.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, msg) = self.classify();
        let envelope = MessageEnvelope::error(code.as_str(), msg);
        (code.status(), axum::Json(envelope)).into_response()
    }
}
