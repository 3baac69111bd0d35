//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Credential entity, value objects, repository trait
//! - `application/` - Use cases and configuration
//! - `infra/` - PostgreSQL and MySQL credential stores
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration and login with username + password
//! - Stateless session tokens (HS256 JWT) carried in the `authToken` cookie
//! - Display-only session read that never touches the credential store
//! - Verified session read for routes that authorize on the session
//!
//! ## Security Model
//! - Passwords hashed with Argon2id by default; a plaintext scheme exists only
//!   for legacy credential tables and compares in constant time
//! - The unverified session decode is used for display, never for access

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::CredentialStore;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::mysql::MySqlCredentialRepository;
    pub use crate::infra::postgres::PgCredentialRepository;
    pub use crate::infra::CredentialStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
