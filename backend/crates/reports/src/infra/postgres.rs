//! PostgreSQL Report Repository
//!
//! Rows come back as `to_jsonb(row)` so no column list is assumed. Table
//! names are validated identifiers and are quoted; filter values are always
//! bound parameters.

use std::time::Duration;

use serde_json::Value;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::domain::entities::Record;
use crate::domain::repository::ReportRepository;
use crate::domain::value_objects::{ReportTables, UserId};
use crate::error::ReportResult;

/// PostgreSQL-backed report repository
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
    tables: ReportTables,
}

impl PgReportRepository {
    pub fn new(pool: PgPool, tables: ReportTables) -> Self {
        Self { pool, tables }
    }

    /// Build a pool that connects on first use
    ///
    /// Startup does not wait for the reports database; an unreachable server
    /// surfaces as a per-request error once `acquire_timeout` elapses.
    pub fn connect_lazy(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
        tables: ReportTables,
    ) -> ReportResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect_lazy(database_url)?;

        Ok(Self::new(pool, tables))
    }
}

impl ReportRepository for PgReportRepository {
    async fn list_incidents(&self) -> ReportResult<Vec<Record>> {
        let sql = format!(
            "SELECT to_jsonb(t) FROM {} t",
            self.tables.incidents.quoted()
        );

        let rows = sqlx::query_scalar::<_, Value>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Record::new).collect())
    }

    async fn list_posts_by_user(&self, user_id: UserId) -> ReportResult<Vec<Record>> {
        let sql = format!(
            "SELECT to_jsonb(t) FROM {} t WHERE t.user_id = $1",
            self.tables.posts.quoted()
        );

        let rows = sqlx::query_scalar::<_, Value>(&sql)
            .bind(user_id.value())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Record::new).collect())
    }

    async fn find_volunteers_by_region(&self, region: &str) -> ReportResult<Vec<Record>> {
        let sql = format!(
            "SELECT to_jsonb(t) FROM {} t WHERE t.region = $1",
            self.tables.volunteers.quoted()
        );

        let rows = sqlx::query_scalar::<_, Value>(&sql)
            .bind(region)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Record::new).collect())
    }

    async fn find_volunteers_by_skill(&self, skill: &str) -> ReportResult<Vec<Record>> {
        // `::text` covers both text and array/jsonb skill columns
        let sql = format!(
            "SELECT to_jsonb(t) FROM {} t WHERE t.skills::text ILIKE $1",
            self.tables.volunteers.quoted()
        );

        let rows = sqlx::query_scalar::<_, Value>(&sql)
            .bind(contains_pattern(skill))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Record::new).collect())
    }
}

/// `%value%` with LIKE metacharacters escaped (backslash is the default escape)
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
