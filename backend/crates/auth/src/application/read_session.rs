//! Read Session Use Case
//!
//! Recovers the username from the session cookie for display. The payload is
//! decoded without checking signature or expiry and the credential store is
//! never consulted, so the result must not be used for access decisions.
//! Use [`VerifySessionUseCase`](super::verify_session::VerifySessionUseCase)
//! for that.

use platform::jwt::decode_unverified;

use crate::domain::entity::session::DisplayClaims;

/// What the session cookie says, for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionView {
    /// No cookie
    Anonymous,
    /// Cookie present but not a decodable token
    Unreadable,
    /// Username from the token payload
    Present { username: String },
}

impl SessionView {
    pub fn username(&self) -> Option<&str> {
        match self {
            SessionView::Present { username } => Some(username),
            _ => None,
        }
    }
}

/// Read session use case
#[derive(Debug, Default)]
pub struct ReadSessionUseCase;

impl ReadSessionUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, session_token: Option<&str>) -> SessionView {
        let Some(token) = session_token else {
            return SessionView::Anonymous;
        };

        match decode_unverified::<DisplayClaims>(token) {
            Ok(claims) => SessionView::Present {
                username: claims.username,
            },
            Err(e) => {
                tracing::debug!(error = %e, "Session cookie could not be decoded");
                SessionView::Unreadable
            }
        }
    }
}
