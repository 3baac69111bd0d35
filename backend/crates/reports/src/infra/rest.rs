//! PostgREST Report Repository
//!
//! Reads the same tables through `{base_url}/rest/v1/{table}`, authenticated
//! with the project's anon key.

use std::time::Duration;

use reqwest::{Client, header};
use serde_json::Value;

use crate::domain::entities::Record;
use crate::domain::repository::ReportRepository;
use crate::domain::value_objects::{ReportTables, TableName, UserId};
use crate::error::{ReportError, ReportResult};

/// PostgREST-backed report repository
#[derive(Clone)]
pub struct RestReportRepository {
    client: Client,
    base_url: String,
    anon_key: String,
    tables: ReportTables,
}

impl RestReportRepository {
    pub fn new(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        timeout: Duration,
        tables: ReportTables,
    ) -> ReportResult<Self> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            tables,
        })
    }

    fn table_url(&self, table: &TableName) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    async fn fetch(&self, table: &TableName, filters: &[(&str, String)]) -> ReportResult<Vec<Record>> {
        let response = self
            .client
            .get(self.table_url(table))
            .query(&[("select", "*")])
            .query(filters)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ReportError::Upstream { status, body });
        }

        let rows: Vec<Value> = response.json().await?;
        Ok(rows.into_iter().map(Record::new).collect())
    }
}

impl ReportRepository for RestReportRepository {
    async fn list_incidents(&self) -> ReportResult<Vec<Record>> {
        self.fetch(&self.tables.incidents, &[]).await
    }

    async fn list_posts_by_user(&self, user_id: UserId) -> ReportResult<Vec<Record>> {
        self.fetch(&self.tables.posts, &[("user_id", format!("eq.{}", user_id))])
            .await
    }

    async fn find_volunteers_by_region(&self, region: &str) -> ReportResult<Vec<Record>> {
        self.fetch(&self.tables.volunteers, &[("region", format!("eq.{}", region))])
            .await
    }

    async fn find_volunteers_by_skill(&self, skill: &str) -> ReportResult<Vec<Record>> {
        self.fetch(
            &self.tables.volunteers,
            &[("skills", format!("ilike.*{}*", ilike_literal(skill)))],
        )
        .await
    }
}

/// Match `value` literally inside an `ilike` filter
///
/// PostgREST rewrites every `*` to `%` before the value reaches `ILIKE`, so
/// `*` cannot be escaped and is dropped. `%`, `_`, and `\` are escaped with
/// the default LIKE escape character, as the Postgres repository does.
fn ilike_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '*' => continue,
            '\\' | '%' | '_' => {
                literal.push('\\');
                literal.push(ch);
            }
            _ => literal.push(ch),
        }
    }
    literal
}
