//! Sign Up Use Case
//!
//! Creates a credential row.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::credential::Credential;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::username::Username;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub username: String,
    pub password: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub username: Username,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: CredentialRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: CredentialRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let username =
            Username::new(input.username).map_err(|e| AuthError::InvalidInput(e.to_string()))?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;

        if self.repo.exists_by_username(&username).await? {
            return Err(AuthError::UsernameTaken);
        }

        let password_hash = self
            .config
            .credential_scheme
            .encode(&password, self.config.pepper())?;

        // A concurrent registration can still win the race; the store reports
        // it as UsernameTaken through the unique constraint.
        self.repo
            .create(&Credential::new(username.clone(), password_hash))
            .await?;

        tracing::info!(
            username = %username,
            scheme = %self.config.credential_scheme,
            "User registered"
        );

        Ok(SignUpOutput { username })
    }
}
