//! Report Error Types
//!
//! Report-specific error variants that render through the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::classify_sqlx, kind::ErrorKind};
use thiserror::Error;

/// Report-specific result type alias
pub type ReportResult<T> = Result<T, ReportError>;

/// Report-specific error variants
#[derive(Debug, Error)]
pub enum ReportError {
    /// Blank or malformed request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configured table name is not a plain identifier
    #[error("Invalid table name: {0:?}")]
    InvalidTable(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// PostgREST request failed before a response arrived
    #[error("Upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// PostgREST answered with a non-success status
    #[error("Upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },
}

impl ReportError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReportError::InvalidInput(_) => ErrorKind::BadRequest,
            ReportError::Database(e) => match classify_sqlx(e) {
                ErrorKind::ServiceUnavailable => ErrorKind::ServiceUnavailable,
                _ => ErrorKind::InternalServerError,
            },
            ReportError::Http(e) if e.is_connect() || e.is_timeout() => {
                ErrorKind::ServiceUnavailable
            }
            ReportError::Http(_) | ReportError::Upstream { .. } => ErrorKind::BadGateway,
            ReportError::InvalidTable(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Driver and upstream details stay in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self.kind() {
            ErrorKind::BadRequest => AppError::bad_request(self.to_string()),
            ErrorKind::ServiceUnavailable => {
                AppError::service_unavailable("Report datastore unavailable")
                    .with_action("Retry the request later")
            }
            ErrorKind::BadGateway => AppError::bad_gateway("Report datastore returned an error"),
            _ => AppError::internal("Internal server error"),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ReportError::Database(e) => {
                tracing::error!(error = %e, "Report database error");
            }
            ReportError::Http(e) => {
                tracing::error!(
                    error = %e,
                    url = ?e.url().map(|u| u.path()),
                    "Report upstream request failed"
                );
            }
            ReportError::Upstream { status, body } => {
                tracing::error!(status = *status, body = %body, "Report upstream returned an error");
            }
            ReportError::InvalidTable(_) => {
                tracing::error!(error = %self, "Report configuration error");
            }
            ReportError::InvalidInput(_) => {
                tracing::debug!(error = %self, "Report request rejected");
            }
        }
    }
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
