//! Find Volunteers Use Case

use std::sync::Arc;

use crate::domain::entities::Record;
use crate::domain::repository::ReportRepository;
use crate::error::{ReportError, ReportResult};

/// Volunteer filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VolunteerFilter {
    /// Exact match on `region`
    Region(String),
    /// Case-insensitive substring match on `skills`
    Skill(String),
}

impl VolunteerFilter {
    fn value(&self) -> &str {
        match self {
            VolunteerFilter::Region(v) | VolunteerFilter::Skill(v) => v,
        }
    }

    fn field(&self) -> &'static str {
        match self {
            VolunteerFilter::Region(_) => "region",
            VolunteerFilter::Skill(_) => "skill",
        }
    }
}

/// Find volunteers use case
pub struct FindVolunteersUseCase<R>
where
    R: ReportRepository,
{
    repo: Arc<R>,
}

impl<R> FindVolunteersUseCase<R>
where
    R: ReportRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, filter: VolunteerFilter) -> ReportResult<Vec<Record>> {
        if filter.value().trim().is_empty() {
            return Err(ReportError::InvalidInput(format!(
                "{} cannot be empty",
                filter.field()
            )));
        }

        let volunteers = match &filter {
            VolunteerFilter::Region(region) => self.repo.find_volunteers_by_region(region).await?,
            VolunteerFilter::Skill(skill) => self.repo.find_volunteers_by_skill(skill).await?,
        };

        tracing::debug!(filter = ?filter, count = volunteers.len(), "Fetched volunteers");
        Ok(volunteers)
    }
}
