//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (in [`models`]);
//! this module adds newtype wrappers for collections and operation results
//! so the same data can be formatted differently depending on context
//! (lists vs. individual items, creation results vs. updates) while all
//! output stays consistent markdown.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (RoadmapSummaries)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::RoadmapSummaries;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
