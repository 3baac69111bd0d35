//! Sign In Use Case
//!
//! Validates credentials and mints a session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::validate_credentials::ValidateCredentialsUseCase;
use crate::domain::entity::session::SessionClaims;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::username::Username;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    /// Signed token for the session cookie
    pub session_token: String,
    pub username: Username,
    pub expires_at: i64,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: CredentialRepository,
{
    validator: ValidateCredentialsUseCase<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignInUseCase<R>
where
    R: CredentialRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            validator: ValidateCredentialsUseCase::new(repo, config.clone()),
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let credential = self
            .validator
            .authenticate(input.username, input.password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Identity comes from the stored row
        let username = credential.username;
        let claims = SessionClaims::new(&username, self.config.session_ttl);
        let session_token = self.config.tokens.issue(&claims)?;

        tracing::info!(
            username = %username,
            jti = %claims.jti,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            username,
            expires_at: claims.exp,
        })
    }
}
