//! List Incidents Use Case

use std::sync::Arc;

use crate::domain::entities::Record;
use crate::domain::repository::ReportRepository;
use crate::error::ReportResult;

/// List incidents use case
pub struct ListIncidentsUseCase<R>
where
    R: ReportRepository,
{
    repo: Arc<R>,
}

impl<R> ListIncidentsUseCase<R>
where
    R: ReportRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> ReportResult<Vec<Record>> {
        let incidents = self.repo.list_incidents().await?;
        tracing::debug!(count = incidents.len(), "Fetched incidents");
        Ok(incidents)
    }
}
