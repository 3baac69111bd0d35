//! Domain Layer
//!
//! Contains records, value objects, and the repository trait.

pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::Record;
pub use repository::ReportRepository;
pub use value_objects::{ReportTables, TableName, UserId};
