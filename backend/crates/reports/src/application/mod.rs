//! Application Layer
//!
//! Use cases and configuration.

pub mod config;
pub mod find_volunteers;
pub mod list_incidents;
pub mod list_posts;

// Re-exports
pub use config::{ReportsBackend, ReportsConfig};
pub use find_volunteers::{FindVolunteersUseCase, VolunteerFilter};
pub use list_incidents::ListIncidentsUseCase;
pub use list_posts::ListPostsByUserUseCase;
