//! Credential store connection

use auth::store::{CredentialStore, MySqlCredentialRepository, PgCredentialRepository};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::config::{DatabaseConfig, DatabaseKind, DatabaseTarget};

/// Open the credential pool for the configured driver
pub async fn connect_credential_store(config: &DatabaseConfig) -> anyhow::Result<CredentialStore> {
    let store = match config.kind {
        DatabaseKind::MySql => {
            let pool = MySqlPoolOptions::new()
                .max_connections(config.max_connections)
                .connect_with(mysql_options(&config.target)?)
                .await?;
            CredentialStore::MySql(MySqlCredentialRepository::new(pool))
        }
        DatabaseKind::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect_with(pg_options(&config.target)?)
                .await?;
            CredentialStore::Postgres(PgCredentialRepository::new(pool))
        }
    };

    Ok(store)
}

fn mysql_options(target: &DatabaseTarget) -> Result<MySqlConnectOptions, sqlx::Error> {
    match target {
        DatabaseTarget::Url(url) => url.parse(),
        DatabaseTarget::Parts {
            host,
            port,
            user,
            password,
            name,
        } => {
            let mut options = MySqlConnectOptions::new()
                .host(host)
                .username(user)
                .database(name);
            if let Some(port) = port {
                options = options.port(*port);
            }
            if let Some(password) = password {
                options = options.password(password);
            }
            Ok(options)
        }
    }
}

fn pg_options(target: &DatabaseTarget) -> Result<PgConnectOptions, sqlx::Error> {
    match target {
        DatabaseTarget::Url(url) => url.parse(),
        DatabaseTarget::Parts {
            host,
            port,
            user,
            password,
            name,
        } => {
            let mut options = PgConnectOptions::new()
                .host(host)
                .username(user)
                .database(name);
            if let Some(port) = port {
                options = options.port(*port);
            }
            if let Some(password) = password {
                options = options.password(password);
            }
            Ok(options)
        }
    }
}
