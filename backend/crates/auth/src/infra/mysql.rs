//! MySQL Credential Repository
//!
//! Same queries as the PostgreSQL repository with `?` placeholders.
//! Username comparisons add a `BINARY` check so the column collation
//! (case-insensitive, pad-space by default) cannot widen a match.

use sqlx::MySqlPool;

use crate::domain::entity::credential::Credential;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::username::Username;
use crate::error::AuthResult;
use crate::infra::{CredentialRow, map_insert_error};

/// MySQL-backed credential repository
#[derive(Clone)]
pub struct MySqlCredentialRepository {
    pool: MySqlPool,
}

impl MySqlCredentialRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

impl CredentialRepository for MySqlCredentialRepository {
    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<Credential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT
                username,
                password_hash
            FROM users
            WHERE username = ? AND BINARY username = ?
            "#,
        )
        .bind(username.as_str())
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CredentialRow::into_credential))
    }

    async fn exists_by_username(&self, username: &Username) -> AuthResult<bool> {
        // COUNT(*) is BIGINT on MySQL
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE username = ? AND BINARY username = ?",
        )
        .bind(username.as_str())
        .bind(username.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    async fn create(&self, credential: &Credential) -> AuthResult<()> {
        sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
            .bind(credential.username.as_str())
            .bind(&credential.password_hash)
            .execute(&self.pool)
            .await
            .map_err(map_insert_error)?;

        Ok(())
    }
}
