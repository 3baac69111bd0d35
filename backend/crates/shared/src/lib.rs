//! Shared Kernel - Cross-crate minimal core
//!
//! Holds the vocabulary every backend crate agrees on:
//! - The unified error type ([`error::app_error::AppError`]) and its result alias
//! - The error classification ([`error::kind::ErrorKind`]) that maps to HTTP status codes
//! - Conversions from driver and library errors (feature-gated)
//!
//! Nothing domain-specific lives here. Credential and report types belong to
//! their own crates.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
