//! Infrastructure Layer
//!
//! Report repository implementations, selected at startup.

pub mod postgres;
pub mod rest;

use crate::application::config::{ReportsBackend, ReportsConfig};
use crate::domain::entities::Record;
use crate::domain::repository::ReportRepository;
use crate::domain::value_objects::UserId;
use crate::error::ReportResult;

pub use postgres::PgReportRepository;
pub use rest::RestReportRepository;

/// Report store selected at startup
#[derive(Clone)]
pub enum ReportStore {
    Postgres(PgReportRepository),
    Rest(RestReportRepository),
}

impl ReportStore {
    /// Build the configured store without contacting it
    pub fn from_config(config: &ReportsConfig) -> ReportResult<Self> {
        let tables = config.tables.clone();

        match &config.backend {
            ReportsBackend::Postgres {
                database_url,
                max_connections,
            } => Ok(ReportStore::Postgres(PgReportRepository::connect_lazy(
                database_url,
                *max_connections,
                config.request_timeout,
                tables,
            )?)),
            ReportsBackend::Rest { base_url, anon_key } => Ok(ReportStore::Rest(
                RestReportRepository::new(
                    base_url.as_str(),
                    anon_key.as_str(),
                    config.request_timeout,
                    tables,
                )?,
            )),
        }
    }
}

impl ReportRepository for ReportStore {
    async fn list_incidents(&self) -> ReportResult<Vec<Record>> {
        match self {
            ReportStore::Postgres(repo) => repo.list_incidents().await,
            ReportStore::Rest(repo) => repo.list_incidents().await,
        }
    }

    async fn list_posts_by_user(&self, user_id: UserId) -> ReportResult<Vec<Record>> {
        match self {
            ReportStore::Postgres(repo) => repo.list_posts_by_user(user_id).await,
            ReportStore::Rest(repo) => repo.list_posts_by_user(user_id).await,
        }
    }

    async fn find_volunteers_by_region(&self, region: &str) -> ReportResult<Vec<Record>> {
        match self {
            ReportStore::Postgres(repo) => repo.find_volunteers_by_region(region).await,
            ReportStore::Rest(repo) => repo.find_volunteers_by_region(region).await,
        }
    }

    async fn find_volunteers_by_skill(&self, skill: &str) -> ReportResult<Vec<Record>> {
        match self {
            ReportStore::Postgres(repo) => repo.find_volunteers_by_skill(skill).await,
            ReportStore::Rest(repo) => repo.find_volunteers_by_skill(skill).await,
        }
    }
}
