//! Validate Credentials Use Case
//!
//! Reports whether a `(username, password)` pair matches a stored credential.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::credential::Credential;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::username::Username;
use crate::error::AuthResult;

/// Validate credentials use case
pub struct ValidateCredentialsUseCase<R>
where
    R: CredentialRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> ValidateCredentialsUseCase<R>
where
    R: CredentialRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// `Ok(false)` when no row matches. Datastore errors are returned as-is.
    pub async fn execute(&self, username: String, password: String) -> AuthResult<bool> {
        Ok(self.authenticate(username, password).await?.is_some())
    }

    /// The stored credential, when the pair matches it
    ///
    /// A store may match rows loosely (collation), so a row whose username is
    /// not byte-identical to the submitted one is treated as no match.
    pub async fn authenticate(
        &self,
        username: String,
        password: String,
    ) -> AuthResult<Option<Credential>> {
        let username = Username::opaque(username);
        let password = ClearTextPassword::opaque(password);

        let Some(credential) = self.repo.find_by_username(&username).await? else {
            tracing::debug!(username = %username, "No credential row for username");
            return Ok(None);
        };

        if credential.username != username {
            tracing::warn!(
                username = %username,
                stored = %credential.username,
                "Credential store returned a row for a different username"
            );
            return Ok(None);
        }

        let matched = self.config.credential_scheme.matches(
            &credential.password_hash,
            &password,
            self.config.pepper(),
        );

        if !matched {
            tracing::debug!(username = %username, "Password does not match");
            return Ok(None);
        }

        Ok(Some(credential))
    }
}
