//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Environment configuration helpers
//! - Cookie management
//! - Cryptographic utilities (random secrets, Base64, constant-time compare)
//! - Password hashing (Argon2id)
//! - Signed session tokens (HS256 JWT)

pub mod config;
pub mod cookie;
pub mod crypto;
pub mod jwt;
pub mod password;
