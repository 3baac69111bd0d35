//! Value Object Module

pub mod credential_scheme;
pub mod username;
