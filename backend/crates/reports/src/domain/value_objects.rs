//! Domain Value Objects
//!
//! Immutable value types for the reports domain.

use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

/// Longest identifier PostgreSQL keeps without truncation
const MAX_IDENTIFIER_LEN: usize = 63;

/// Table name that is safe to splice into SQL and URLs
///
/// ASCII letters, digits and `_`, not starting with a digit. Case is kept,
/// so `IncidentReports` is quoted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(String);

impl TableName {
    pub fn new(raw: impl Into<String>) -> Result<Self, ReportError> {
        let raw = raw.into();

        let mut chars = raw.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

        if !valid_start || !valid_rest || raw.len() > MAX_IDENTIFIER_LEN {
            return Err(ReportError::InvalidTable(raw));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Double-quoted identifier for SQL
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three tables the readers use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTables {
    pub incidents: TableName,
    pub posts: TableName,
    pub volunteers: TableName,
}

impl Default for ReportTables {
    fn default() -> Self {
        Self {
            incidents: TableName("incidents".to_string()),
            posts: TableName("posts".to_string()),
            volunteers: TableName("volunteers".to_string()),
        }
    }
}

/// Post owner id (`posts.user_id`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromStr for UserId {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| ReportError::InvalidInput(format!("user id must be an integer, got {:?}", s)))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
