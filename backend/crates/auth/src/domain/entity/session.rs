//! Session Token Claims
//!
//! Sessions are never stored server-side. Everything the server knows about a
//! session is in the signed token.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::domain::value_object::username::Username;

/// Claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub username: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
    /// Token ID
    pub jti: String,
}

impl SessionClaims {
    /// Claims for a fresh session
    ///
    /// `exp` saturates at `i64::MAX` for lifetimes past the representable range.
    pub fn new(username: &Username, ttl: Duration) -> Self {
        let now = Utc::now().timestamp();
        let ttl = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        Self {
            username: username.as_str().to_string(),
            iat: now,
            exp: now.saturating_add(ttl),
            jti: Uuid::new_v4().to_string(),
        }
    }
}

/// The part of a token payload used for display
///
/// Only `username` is required, so any payload carrying it can be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayClaims {
    pub username: String,
}
