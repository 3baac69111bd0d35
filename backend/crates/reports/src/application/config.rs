//! Application Configuration
//!
//! Configuration for the Reports application layer.

use std::fmt;
use std::time::Duration;

use platform::config::{ConfigError, Env};

use crate::domain::value_objects::{ReportTables, TableName};

/// Where report rows are read from
#[derive(Clone)]
pub enum ReportsBackend {
    /// Direct connection to the hosted Postgres
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    /// PostgREST endpoint (`{base_url}/rest/v1/{table}`)
    Rest { base_url: String, anon_key: String },
}

impl ReportsBackend {
    pub fn name(&self) -> &'static str {
        match self {
            ReportsBackend::Postgres { .. } => "postgres",
            ReportsBackend::Rest { .. } => "rest",
        }
    }
}

impl fmt::Debug for ReportsBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportsBackend::Postgres {
                max_connections, ..
            } => f
                .debug_struct("Postgres")
                .field("database_url", &"[REDACTED]")
                .field("max_connections", max_connections)
                .finish(),
            ReportsBackend::Rest { base_url, .. } => f
                .debug_struct("Rest")
                .field("base_url", base_url)
                .field("anon_key", &"[REDACTED]")
                .finish(),
        }
    }
}

/// Reports application configuration
#[derive(Debug, Clone)]
pub struct ReportsConfig {
    pub backend: ReportsBackend,
    pub tables: ReportTables,
    /// Per-request limit for pool acquire and HTTP calls
    pub request_timeout: Duration,
}

impl ReportsConfig {
    pub fn new(backend: ReportsBackend) -> Self {
        Self {
            backend,
            tables: ReportTables::default(),
            request_timeout: Duration::from_secs(10),
        }
    }

    /// Load from environment
    ///
    /// `REPORTS_DATABASE_URL` selects the Postgres backend and wins over
    /// `SUPABASE_URL`, which selects PostgREST and needs `SUPABASE_ANON_KEY`.
    pub fn from_env(env: &Env) -> Result<Self, ConfigError> {
        let backend = if let Some(database_url) = env.get("REPORTS_DATABASE_URL") {
            ReportsBackend::Postgres {
                database_url,
                max_connections: env.parse_or("REPORTS_MAX_CONNECTIONS", 5)?,
            }
        } else if let Some(base_url) = env.get("SUPABASE_URL") {
            ReportsBackend::Rest {
                base_url: base_url.trim_end_matches('/').to_string(),
                anon_key: env.require("SUPABASE_ANON_KEY")?,
            }
        } else {
            return Err(ConfigError::Missing(
                "REPORTS_DATABASE_URL or SUPABASE_URL".to_string(),
            ));
        };

        let mut config = Self::new(backend);
        config.tables = ReportTables {
            incidents: table_from_env(env, "INCIDENTS_TABLE", "incidents")?,
            posts: table_from_env(env, "POSTS_TABLE", "posts")?,
            volunteers: table_from_env(env, "VOLUNTEERS_TABLE", "volunteers")?,
        };
        config.request_timeout = Duration::from_secs(env.parse_or("REPORTS_TIMEOUT_SECS", 10)?);

        Ok(config)
    }
}

fn table_from_env(env: &Env, name: &str, default: &str) -> Result<TableName, ConfigError> {
    let raw = env.get_or(name, default);
    TableName::new(raw.clone())
        .map_err(|_| ConfigError::invalid(name, &raw, "must be a plain SQL identifier"))
}
