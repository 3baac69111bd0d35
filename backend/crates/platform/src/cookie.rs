//! Cookie Management Infrastructure
//!
//! Builds and reads cookies through `axum_extra`'s cookie jar.

use axum_extra::extract::cookie::{Cookie, CookieJar};

pub use axum_extra::extract::cookie::SameSite;

/// Cookie configuration
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
        }
    }
}

impl CookieConfig {
    /// Session cookie carrying `value` (no Max-Age: lives for the browser session)
    pub fn build_cookie(&self, value: impl Into<String>) -> Cookie<'static> {
        Cookie::build((self.name.clone(), value.into()))
            .path(self.path.clone())
            .http_only(self.http_only)
            .secure(self.secure)
            .same_site(self.same_site)
            .build()
    }

    /// Empty, already-expired cookie that makes the browser drop the value
    pub fn build_removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.build_cookie("");
        cookie.make_removal();
        cookie
    }

    /// Read this cookie's value from a jar
    pub fn read(&self, jar: &CookieJar) -> Option<String> {
        jar.get(&self.name)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// Parse a SameSite policy name (case-insensitive)
pub fn parse_same_site(raw: &str) -> Option<SameSite> {
    match raw.to_ascii_lowercase().as_str() {
        "strict" => Some(SameSite::Strict),
        "lax" => Some(SameSite::Lax),
        "none" => Some(SameSite::None),
        _ => None,
    }
}
