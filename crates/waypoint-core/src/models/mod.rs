//! Data models for roadmaps, steps, and links.
//!
//! This module contains the core domain models of the Waypoint roadmap
//! system. Display implementations for these models live in
//! [`crate::display::models`] to keep data structures and presentation
//! logic separate.
//!
//! Two roadmap shapes exist on purpose:
//!
//! - [`RoadmapDraft`] is the normalizer's output — canonical content with
//!   every field populated, but no identity. It exists only in memory.
//! - [`Roadmap`] is the persisted record. The storage layer assigns `id`,
//!   `owner`, and the timestamps, and owns all subsequent mutation.

pub mod filters;
pub mod link;
pub mod roadmap;
pub mod step;
pub mod summary;


// Re-export all public types at the models level
pub use filters::RoadmapFilter;
pub use link::{Link, SEQUENCING_LABEL};
pub use roadmap::{Roadmap, RoadmapDraft, DEFAULT_CATEGORY, DEFAULT_DIFFICULTY, DEFAULT_TITLE};
pub use step::{Step, StepKind};
pub use summary::RoadmapSummary;
