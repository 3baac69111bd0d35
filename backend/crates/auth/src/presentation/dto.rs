//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::SessionView;

// ============================================================================
// Register / Login
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
}

/// Register response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub username: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

/// Login response (token itself travels only in the cookie)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub username: String,
    /// Unix seconds
    pub expires_at: i64,
}

// ============================================================================
// Session
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Anonymous,
    Unreadable,
    Present,
}

/// Display-only session response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub state: SessionState,
    pub username: Option<String>,
}

impl From<SessionView> for SessionResponse {
    fn from(view: SessionView) -> Self {
        match view {
            SessionView::Anonymous => Self {
                state: SessionState::Anonymous,
                username: None,
            },
            SessionView::Unreadable => Self {
                state: SessionState::Unreadable,
                username: None,
            },
            SessionView::Present { username } => Self {
                state: SessionState::Present,
                username: Some(username),
            },
        }
    }
}

/// Verified session response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub username: String,
    pub issued_at: i64,
    pub expires_at: i64,
}
