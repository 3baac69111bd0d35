//! Username Value Object
//!
//! A username is an opaque string. It is stored and compared exactly as
//! submitted: no case folding, no normalization, no trimming.
//!
//! The only rule is applied at registration, where a blank username is
//! rejected. Lookups accept any string; a username that was never registered
//! simply has no credential row.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Username validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// Empty or whitespace only
    Blank,
}

impl std::fmt::Display for UsernameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsernameError::Blank => write!(f, "Username cannot be empty"),
        }
    }
}

impl std::error::Error for UsernameError {}

/// Username value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Accept a username for registration
    pub fn new(raw: impl Into<String>) -> Result<Self, UsernameError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(UsernameError::Blank);
        }
        Ok(Self(raw))
    }

    /// Wrap a submitted or stored username without checks
    pub fn opaque(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
