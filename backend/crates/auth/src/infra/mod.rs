//! Infrastructure Layer
//!
//! Credential store implementations. Both read the same `users` table shape
//! (`username`, `password_hash`); which one runs is decided at startup from
//! the database URL.

pub mod mysql;
pub mod postgres;

use crate::domain::entity::credential::Credential;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::username::Username;
use crate::error::{AuthError, AuthResult};

pub use mysql::MySqlCredentialRepository;
pub use postgres::PgCredentialRepository;

/// Credential store selected at startup
#[derive(Clone)]
pub enum CredentialStore {
    Postgres(PgCredentialRepository),
    MySql(MySqlCredentialRepository),
}

impl CredentialStore {
    pub fn backend(&self) -> &'static str {
        match self {
            CredentialStore::Postgres(_) => "postgres",
            CredentialStore::MySql(_) => "mysql",
        }
    }
}

impl CredentialRepository for CredentialStore {
    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<Credential>> {
        match self {
            CredentialStore::Postgres(repo) => repo.find_by_username(username).await,
            CredentialStore::MySql(repo) => repo.find_by_username(username).await,
        }
    }

    async fn exists_by_username(&self, username: &Username) -> AuthResult<bool> {
        match self {
            CredentialStore::Postgres(repo) => repo.exists_by_username(username).await,
            CredentialStore::MySql(repo) => repo.exists_by_username(username).await,
        }
    }

    async fn create(&self, credential: &Credential) -> AuthResult<()> {
        match self {
            CredentialStore::Postgres(repo) => repo.create(credential).await,
            CredentialStore::MySql(repo) => repo.create(credential).await,
        }
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
pub(crate) struct CredentialRow {
    username: String,
    password_hash: String,
}

impl CredentialRow {
    pub(crate) fn into_credential(self) -> Credential {
        Credential::new(Username::opaque(self.username), self.password_hash)
    }
}

/// Unique violations on insert mean the username was registered concurrently
pub(crate) fn map_insert_error(err: sqlx::Error) -> AuthError {
    let unique_violation = err
        .as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation());

    if unique_violation {
        AuthError::UsernameTaken
    } else {
        AuthError::Database(err)
    }
}
