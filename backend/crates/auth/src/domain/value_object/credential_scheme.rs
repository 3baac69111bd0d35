//! Credential Scheme
//!
//! Decides what the `password_hash` column holds and how a submitted password
//! is checked against it.

use std::fmt;
use std::str::FromStr;

use platform::crypto::constant_time_eq;
use platform::password::{ClearTextPassword, HashedPassword};

use crate::error::{AuthError, AuthResult};

/// How stored credentials are encoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CredentialScheme {
    /// Argon2id PHC string
    #[default]
    Argon2,
    /// Column holds the password itself (legacy tables)
    Plaintext,
}

impl CredentialScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialScheme::Argon2 => "argon2",
            CredentialScheme::Plaintext => "plaintext",
        }
    }

    /// Produce the value to store in `password_hash`
    pub fn encode(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> AuthResult<String> {
        match self {
            CredentialScheme::Argon2 => password
                .hash(pepper)
                .map(|hashed| hashed.as_phc_string().to_string())
                .map_err(|e| AuthError::Internal(e.to_string())),
            CredentialScheme::Plaintext => String::from_utf8(password.as_bytes().to_vec())
                .map_err(|e| AuthError::Internal(e.to_string())),
        }
    }

    /// Check a submitted password against a stored `password_hash`
    pub fn matches(&self, stored: &str, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        match self {
            CredentialScheme::Argon2 => match HashedPassword::from_phc_string(stored) {
                Ok(hashed) => hashed.verify(password, pepper),
                Err(_) => {
                    tracing::debug!("Stored credential is not an Argon2 PHC string");
                    false
                }
            },
            CredentialScheme::Plaintext => constant_time_eq(stored.as_bytes(), password.as_bytes()),
        }
    }
}

impl fmt::Display for CredentialScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CredentialScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "argon2" | "argon2id" => Ok(CredentialScheme::Argon2),
            "plaintext" | "plain" => Ok(CredentialScheme::Plaintext),
            other => Err(format!("unknown credential scheme '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(raw: &str) -> ClearTextPassword {
        ClearTextPassword::opaque(raw.to_string())
    }

    #[test]
    fn test_argon2_encode_and_match() {
        let scheme = CredentialScheme::Argon2;
        let stored = scheme.encode(&password("secret"), None).unwrap();

        assert!(stored.starts_with("$argon2id$"));
        assert!(scheme.matches(&stored, &password("secret"), None));
        assert!(!scheme.matches(&stored, &password("wrong"), None));
    }

    #[test]
    fn test_argon2_never_matches_plain_column() {
        assert!(!CredentialScheme::Argon2.matches("secret", &password("secret"), None));
    }

    #[test]
    fn test_plaintext_encode_and_match() {
        let scheme = CredentialScheme::Plaintext;
        let stored = scheme.encode(&password("secret"), None).unwrap();

        assert_eq!(stored, "secret");
        assert!(scheme.matches(&stored, &password("secret"), None));
        assert!(!scheme.matches(&stored, &password("Secret"), None));
        assert!(!scheme.matches("", &password("secret"), None));
    }

    #[test]
    fn test_parse() {
        assert_eq!("Argon2".parse::<CredentialScheme>(), Ok(CredentialScheme::Argon2));
        assert_eq!("plaintext".parse::<CredentialScheme>(), Ok(CredentialScheme::Plaintext));
        assert!("md5".parse::<CredentialScheme>().is_err());
    }
}
