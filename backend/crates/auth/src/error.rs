//! Auth Error Types
//!
//! Auth-specific error variants that render through the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::classify_sqlx, kind::ErrorKind};
use platform::jwt::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username already registered
    #[error("Username already exists")]
    UsernameTaken,

    /// No credential row matched
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Blank or malformed request field
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Password rejected at registration
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// No session cookie
    #[error("Session required")]
    SessionMissing,

    /// Session token failed signature or format checks
    #[error("Session is invalid")]
    SessionInvalid,

    /// Session token past its `exp`
    #[error("Session has expired")]
    SessionExpired,

    /// Credential store error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UsernameTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::SessionMissing
            | AuthError::SessionInvalid
            | AuthError::SessionExpired => ErrorKind::Unauthorized,
            AuthError::InvalidInput(_) | AuthError::PasswordValidation(_) => {
                ErrorKind::BadRequest
            }
            AuthError::Database(e) => match classify_sqlx(e) {
                ErrorKind::ServiceUnavailable => ErrorKind::ServiceUnavailable,
                _ => ErrorKind::InternalServerError,
            },
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Driver details stay in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(_) if self.kind() == ErrorKind::ServiceUnavailable => {
                AppError::service_unavailable("Credential store unavailable")
                    .with_action("Retry the request later")
            }
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AuthError::SessionExpired,
            TokenError::Invalid(_) | TokenError::Malformed(_) => AuthError::SessionInvalid,
            TokenError::Encode(e) => AuthError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::UsernameTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::InvalidInput("username".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::SessionExpired.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_database_connectivity_is_unavailable() {
        let err = AuthError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_app_error().message(), "Credential store unavailable");
    }

    #[test]
    fn test_database_query_error_is_internal() {
        let err = AuthError::Database(sqlx::Error::ColumnNotFound("password_hash".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_app_error().message().contains("password_hash"));
    }

    #[test]
    fn test_token_error_mapping() {
        assert!(matches!(
            AuthError::from(TokenError::Expired),
            AuthError::SessionExpired
        ));
    }
}
