//! Repository Traits
//!
//! Interface for credential persistence. Implementations are in the infra layer.

use crate::domain::entity::credential::Credential;
use crate::domain::value_object::username::Username;
use crate::error::AuthResult;

/// Credential repository trait
///
/// Every call borrows one pooled connection for the duration of one query.
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Find the credential row for a username
    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<Credential>>;

    /// Check if a username is registered
    async fn exists_by_username(&self, username: &Username) -> AuthResult<bool>;

    /// Insert a new credential row
    ///
    /// Returns `AuthError::UsernameTaken` when the username already exists.
    async fn create(&self, credential: &Credential) -> AuthResult<()>;
}
