//! Credential Entity
//!
//! One row of the `users` table.

use crate::domain::value_object::username::Username;

/// Stored credential
///
/// `password_hash` is whatever the configured credential scheme wrote.
#[derive(Clone)]
pub struct Credential {
    pub username: Username,
    pub password_hash: String,
}

impl Credential {
    pub fn new(username: Username, password_hash: String) -> Self {
        Self {
            username,
            password_hash,
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}
