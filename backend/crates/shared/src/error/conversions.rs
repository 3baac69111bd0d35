//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`],
//! and the RFC 7807 response rendering.

use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            AppError::bad_request(format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Classify a driver error without consuming it.
///
/// Connectivity failures become `ServiceUnavailable`; constraint violations
/// become `Conflict`/`BadRequest`; everything else is an internal query error.
/// SQLSTATE codes are shared by PostgreSQL and MySQL for the classes used here
/// (MySQL reports duplicate keys as `23000`).
#[cfg(feature = "sqlx")]
pub fn classify_sqlx(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::RowNotFound => ErrorKind::NotFound,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            ErrorKind::ServiceUnavailable
        }
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // Class 23 - Integrity Constraint Violation
            Some("23000") | Some("23505") | Some("23503") => ErrorKind::Conflict,
            Some("23502") | Some("23514") => ErrorKind::BadRequest,
            // Class 42 - Access Rule Violation
            Some("42501") => ErrorKind::Forbidden,
            // Class 08 - Connection Exception, 53 - Insufficient Resources, 57 - Operator Intervention
            Some(code)
                if code.starts_with("08") || code.starts_with("53") || code.starts_with("57") =>
            {
                ErrorKind::ServiceUnavailable
            }
            _ => ErrorKind::InternalServerError,
        },
        _ => ErrorKind::InternalServerError,
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let message = match classify_sqlx(&err) {
            ErrorKind::ServiceUnavailable => "Database unavailable",
            ErrorKind::Conflict => "Duplicate or conflicting record",
            ErrorKind::BadRequest => "Constraint violation",
            ErrorKind::Forbidden => "Insufficient privilege",
            ErrorKind::NotFound => "Record not found",
            _ => "Database error",
        };
        AppError::new(classify_sqlx(&err), message).with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}
