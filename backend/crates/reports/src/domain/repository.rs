//! Repository Traits
//!
//! Interface for report reads. Implementations are in the infra layer.

use crate::domain::entities::Record;
use crate::domain::value_objects::UserId;
use crate::error::ReportResult;

/// Report repository trait
///
/// Every call is a single read: one pooled connection or one HTTP request.
/// An empty result is not an error.
#[trait_variant::make(ReportRepository: Send)]
pub trait LocalReportRepository {
    /// All incident rows
    async fn list_incidents(&self) -> ReportResult<Vec<Record>>;

    /// Post rows whose `user_id` equals `user_id`
    async fn list_posts_by_user(&self, user_id: UserId) -> ReportResult<Vec<Record>>;

    /// Volunteer rows whose `region` equals `region` exactly
    async fn find_volunteers_by_region(&self, region: &str) -> ReportResult<Vec<Record>>;

    /// Volunteer rows whose `skills` contain `skill`, case-insensitively
    async fn find_volunteers_by_skill(&self, skill: &str) -> ReportResult<Vec<Record>>;
}
