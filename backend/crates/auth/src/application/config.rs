//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::config::{ConfigError, Env};
use platform::cookie::CookieConfig;
use platform::crypto::{from_base64, random_bytes};
use platform::jwt::TokenCodec;

pub use crate::domain::value_object::credential_scheme::CredentialScheme;
/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Name of the session cookie the front-end reads
pub const SESSION_COOKIE_NAME: &str = "authToken";

/// Minimum decoded length of `SESSION_SECRET`
pub const SESSION_SECRET_MIN_BYTES: usize = 32;

/// Longest accepted session lifetime (one year)
pub const SESSION_TTL_MAX_SECS: u64 = 365 * 24 * 3600;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// How `password_hash` is written and checked
    pub credential_scheme: CredentialScheme,
    /// Session cookie attributes
    pub cookie: CookieConfig,
    /// Session token lifetime (12 hours)
    pub session_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// HS256 signer for session tokens
    pub tokens: TokenCodec,
}

impl AuthConfig {
    /// Create config signing with the given secret
    pub fn new(session_secret: &[u8]) -> Self {
        Self {
            credential_scheme: CredentialScheme::default(),
            cookie: CookieConfig {
                name: SESSION_COOKIE_NAME.to_string(),
                ..CookieConfig::default()
            },
            session_ttl: Duration::from_secs(12 * 3600),
            password_pepper: None,
            tokens: TokenCodec::hs256(session_secret),
        }
    }

    /// Create config with a random session secret
    pub fn with_random_secret() -> Self {
        Self::new(&random_bytes(SESSION_SECRET_MIN_BYTES))
    }

    /// Create config for development (random secret, insecure cookie)
    pub fn development() -> Self {
        let mut config = Self::with_random_secret();
        config.cookie.secure = false;
        config
    }

    /// Load from environment
    ///
    /// In development a missing `SESSION_SECRET` falls back to a random one and
    /// cookies default to non-Secure. Otherwise the secret is required.
    pub fn from_env(env: &Env, development: bool) -> Result<Self, ConfigError> {
        let mut config = match env.get("SESSION_SECRET") {
            Some(encoded) => Self::new(&decode_secret(&encoded)?),
            None if development => {
                tracing::warn!("SESSION_SECRET not set, using a random secret");
                Self::with_random_secret()
            }
            None => return Err(ConfigError::Missing("SESSION_SECRET".to_string())),
        };

        config.credential_scheme = env.parse_or("CREDENTIAL_SCHEME", CredentialScheme::default())?;
        config.session_ttl = session_ttl_from_env(env)?;
        config.cookie.secure = env.flag_or("COOKIE_SECURE", !development)?;
        config.password_pepper = env.get("PASSWORD_PEPPER").map(String::into_bytes);

        Ok(config)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

fn session_ttl_from_env(env: &Env) -> Result<Duration, ConfigError> {
    let secs: u64 = env.parse_or("SESSION_TTL_SECS", 12 * 3600)?;

    if secs == 0 || secs > SESSION_TTL_MAX_SECS {
        return Err(ConfigError::invalid(
            "SESSION_TTL_SECS",
            &secs.to_string(),
            format!("must be between 1 and {}", SESSION_TTL_MAX_SECS),
        ));
    }

    Ok(Duration::from_secs(secs))
}

fn decode_secret(encoded: &str) -> Result<Vec<u8>, ConfigError> {
    let secret = from_base64(encoded)
        .map_err(|e| ConfigError::invalid("SESSION_SECRET", "[REDACTED]", e))?;

    if secret.len() < SESSION_SECRET_MIN_BYTES {
        return Err(ConfigError::invalid(
            "SESSION_SECRET",
            "[REDACTED]",
            format!("must decode to at least {} bytes", SESSION_SECRET_MIN_BYTES),
        ));
    }

    Ok(secret)
}
