//! Server Configuration
//!
//! Everything is read from environment variables (a `.env` file is loaded
//! first by `main`).
//!
//! | Env Var                | Default                    |
//! |------------------------|----------------------------|
//! | `HOST`                 | `0.0.0.0`                  |
//! | `PORT`                 | `5000`                     |
//! | `FRONTEND_ORIGINS`     | `http://localhost:3000`    |
//! | `DATABASE_URL`         | built from `DB_*`          |
//! | `DB_KIND`              | `mysql`                    |
//! | `DB_HOST`              | `localhost`                |
//! | `DB_PORT`              | driver default             |
//! | `DB_USER`              | `root`                     |
//! | `DB_PASSWORD`          | none                       |
//! | `DB_NAME`              | `usccdb`                   |
//! | `DB_MAX_CONNECTIONS`   | `5`                        |
//!
//! Session and report variables are read by `auth` and `reports`.

use std::fmt;

use auth::AuthConfig;
use platform::config::{ConfigError, Env};
use reports::ReportsConfig;

/// Credential store driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    MySql,
    Postgres,
}

impl DatabaseKind {
    fn parse(name: &str, raw: &str) -> Result<Self, ConfigError> {
        match raw.to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(DatabaseKind::MySql),
            "postgres" | "postgresql" => Ok(DatabaseKind::Postgres),
            _ => Err(ConfigError::invalid(name, raw, "expected mysql or postgres")),
        }
    }

    /// Driver named by a connection URL scheme
    fn from_url(url: &str) -> Result<Self, ConfigError> {
        let scheme = url.split("://").next().unwrap_or_default();
        DatabaseKind::parse("DATABASE_URL", scheme)
            .map_err(|_| ConfigError::invalid("DATABASE_URL", "[REDACTED]", "unsupported URL scheme"))
    }
}

/// How to reach the credential store
#[derive(Clone)]
pub enum DatabaseTarget {
    Url(String),
    Parts {
        host: String,
        port: Option<u16>,
        user: String,
        password: Option<String>,
        name: String,
    },
}

impl fmt::Debug for DatabaseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseTarget::Url(_) => f.debug_tuple("Url").field(&"[REDACTED]").finish(),
            DatabaseTarget::Parts {
                host,
                port,
                user,
                name,
                ..
            } => f
                .debug_struct("Parts")
                .field("host", host)
                .field("port", port)
                .field("user", user)
                .field("name", name)
                .finish_non_exhaustive(),
        }
    }
}

/// Credential store configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub kind: DatabaseKind,
    pub target: DatabaseTarget,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env(env: &Env) -> Result<Self, ConfigError> {
        let max_connections = env.parse_or("DB_MAX_CONNECTIONS", 5)?;

        if let Some(url) = env.get("DATABASE_URL") {
            return Ok(Self {
                kind: DatabaseKind::from_url(&url)?,
                target: DatabaseTarget::Url(url),
                max_connections,
            });
        }

        let kind = DatabaseKind::parse("DB_KIND", &env.get_or("DB_KIND", "mysql"))?;

        Ok(Self {
            kind,
            target: DatabaseTarget::Parts {
                host: env.get_or("DB_HOST", "localhost"),
                port: env.parse_opt("DB_PORT")?,
                user: env.get_or("DB_USER", "root"),
                password: env.get("DB_PASSWORD"),
                name: env.get_or("DB_NAME", "usccdb"),
            },
            max_connections,
        })
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins
    pub frontend_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env(env: &Env) -> Result<Self, ConfigError> {
        Ok(Self {
            host: env.get_or("HOST", "0.0.0.0"),
            port: env.parse_or("PORT", 5000)?,
            frontend_origins: env.list_or("FRONTEND_ORIGINS", "http://localhost:3000"),
        })
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub reports: ReportsConfig,
}

impl ApiConfig {
    /// `development` relaxes the session secret and cookie defaults
    pub fn from_env(env: &Env, development: bool) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(env)?,
            database: DatabaseConfig::from_env(env)?,
            auth: AuthConfig::from_env(env, development)?,
            reports: ReportsConfig::from_env(env)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let env = Env::from_pairs([("SUPABASE_URL", "https://p.supabase.co"), ("SUPABASE_ANON_KEY", "k")]);
        let config = ApiConfig::from_env(&env, true).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.frontend_origins, vec!["http://localhost:3000"]);

        assert_eq!(config.database.kind, DatabaseKind::MySql);
        assert_eq!(config.database.max_connections, 5);
        match config.database.target {
            DatabaseTarget::Parts {
                host, user, name, port, password,
            } => {
                assert_eq!(host, "localhost");
                assert_eq!(user, "root");
                assert_eq!(name, "usccdb");
                assert_eq!(port, None);
                assert_eq!(password, None);
            }
            DatabaseTarget::Url(_) => panic!("expected parts"),
        }
    }

    #[test]
    fn test_database_url_selects_driver() {
        let env = Env::from_pairs([("DATABASE_URL", "postgres://u:p@localhost/app")]);
        let config = DatabaseConfig::from_env(&env).unwrap();
        assert_eq!(config.kind, DatabaseKind::Postgres);

        let env = Env::from_pairs([("DATABASE_URL", "mysql://root@localhost/usccdb")]);
        assert_eq!(DatabaseConfig::from_env(&env).unwrap().kind, DatabaseKind::MySql);

        let env = Env::from_pairs([("DATABASE_URL", "sqlite://app.db")]);
        assert!(DatabaseConfig::from_env(&env).is_err());
    }

    #[test]
    fn test_database_parts() {
        let env = Env::from_pairs([
            ("DB_KIND", "postgres"),
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
            ("DB_PASSWORD", "hunter2"),
        ]);
        let config = DatabaseConfig::from_env(&env).unwrap();

        assert_eq!(config.kind, DatabaseKind::Postgres);
        assert!(!format!("{:?}", config).contains("hunter2"));
        match config.target {
            DatabaseTarget::Parts { host, port, .. } => {
                assert_eq!(host, "db.internal");
                assert_eq!(port, Some(6543));
            }
            DatabaseTarget::Url(_) => panic!("expected parts"),
        }
    }

    #[test]
    fn test_invalid_values() {
        let env = Env::from_pairs([("PORT", "http")]);
        assert!(ServerConfig::from_env(&env).is_err());

        let env = Env::from_pairs([("DB_KIND", "oracle")]);
        assert!(DatabaseConfig::from_env(&env).is_err());
    }

    #[test]
    fn test_reports_backend_required() {
        let env = Env::from_pairs(Vec::<(String, String)>::new());
        assert!(matches!(
            ApiConfig::from_env(&env, true),
            Err(ConfigError::Missing(_))
        ));
    }
}
