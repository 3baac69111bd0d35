//! Sign Out Use Case
//!
//! Sessions live only in the cookie, so signing out never fails. The handler
//! clears the cookie; this records who left.

use platform::jwt::decode_unverified;

use crate::domain::entity::session::DisplayClaims;

/// Sign out use case
#[derive(Debug, Default)]
pub struct SignOutUseCase;

impl SignOutUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, session_token: Option<&str>) {
        match session_token.map(decode_unverified::<DisplayClaims>) {
            Some(Ok(claims)) => {
                tracing::info!(username = %claims.username, "User signed out");
            }
            Some(Err(_)) => {
                tracing::debug!("Signed out with an unreadable session cookie");
            }
            None => {
                tracing::debug!("Signed out without a session cookie");
            }
        }
    }
}
