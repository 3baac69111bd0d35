//! Reports Backend Module
//!
//! Read-only access to incidents, posts, and volunteers kept in the hosted
//! Postgres instance, either through a direct connection or through its
//! PostgREST endpoint.
//!
//! Clean Architecture structure:
//! - `domain/` - Records, value objects, repository trait
//! - `application/` - Use cases and configuration
//! - `infra/` - PostgreSQL and PostgREST implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Rows are passed through as JSON objects. Columns are whatever the tables
//! hold; only `user_id`, `region`, and `skills` are interpreted.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ReportsConfig;
pub use error::{ReportError, ReportResult};
pub use infra::ReportStore;
pub use presentation::router::reports_router;

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::ReportStore;
    pub use crate::infra::postgres::PgReportRepository;
    pub use crate::infra::rest::RestReportRepository;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
