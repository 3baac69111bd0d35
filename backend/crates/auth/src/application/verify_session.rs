//! Verify Session Use Case
//!
//! Checks the session token signature and expiry.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::session::SessionClaims;
use crate::error::{AuthError, AuthResult};

/// Verify session use case
pub struct VerifySessionUseCase {
    config: Arc<AuthConfig>,
}

impl VerifySessionUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, session_token: Option<&str>) -> AuthResult<SessionClaims> {
        let token = session_token.ok_or(AuthError::SessionMissing)?;
        let claims: SessionClaims = self.config.tokens.verify(token)?;
        Ok(claims)
    }
}
