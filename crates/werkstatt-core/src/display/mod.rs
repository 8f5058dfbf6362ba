//! Display formatting functions and result types.
//!
//! Display implementations on the domain models produce markdown for rich
//! terminal rendering; newtype wrappers cover collections and operation
//! results. Business logic stays in the models, presentation lives here.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (ProjectSummaries, Features)
//! - [`results`]: Operation result types (CreateResult, UpdateResult,
//!   DeleteResult, MaterializedNotice) and status lines (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

// Re-export commonly used types for convenience
pub use collections::{Features, ProjectSummaries};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, MaterializedNotice, OperationStatus, UpdateResult};
