//! Core library for the Waypoint roadmap generation application.
//!
//! This crate provides the core business logic for turning raw AI model
//! responses into persisted learning roadmaps: response repair, structure
//! normalization, database operations, data models, and error handling.
//!
//! # Pipeline Architecture
//!
//! Roadmap generation is a three-stage pipeline:
//!
//! - **Repair** ([`repair`]): Recover a JSON document from a raw model
//!   response that may be wrapped in code fences or prose
//! - **Normalize** ([`normalize`]): Convert the loose JSON into a canonical
//!   [`models::RoadmapDraft`] with stable step IDs and sequencing edges
//! - **Persist** ([`service::RoadmapService`]): Store and query roadmaps
//!   scoped to their owner
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//!
//! This separation allows the same data to be formatted differently depending
//! on context (lists vs. individual items, creation results vs. updates, etc.)
//! while maintaining consistency across all output.
//!
//! # Quick Start
//!
//! ```rust
//! use waypoint_core::{
//!     auth::AuthContext,
//!     params::GenerateRoadmap,
//!     service::RoadmapServiceBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a service instance
//! let service = RoadmapServiceBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let auth = AuthContext::new("user-1");
//!
//! // Turn a raw model response into a stored roadmap
//! let params = GenerateRoadmap {
//!     raw_response: r#"Here you go! {"title": "Learn Rust", "nodes": ["Basics", "Ownership"]}"#
//!         .to_string(),
//!     title_hint: None,
//! };
//! let roadmap = service.generate_roadmap(&auth, &params).await?;
//! println!("Created roadmap: {}", roadmap);
//!
//! // List roadmaps as summaries
//! use waypoint_core::params::ListRoadmaps;
//! let roadmaps = service
//!     .list_roadmaps_summary(&auth, &ListRoadmaps::default())
//!     .await?;
//! for roadmap in &roadmaps.0 {
//!     println!("Roadmap: {}", roadmap.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod normalize;
pub mod params;
pub mod repair;
pub mod service;

// Re-export commonly used types
pub use auth::AuthContext;
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, LocalDateTime, OperationStatus, RoadmapSummaries, UpdateResult,
};
pub use error::{ErrorKind, Result, RoadmapError};
pub use models::{Link, Roadmap, RoadmapDraft, RoadmapFilter, RoadmapSummary, Step, StepKind};
pub use normalize::normalize;
pub use params::{DeleteRoadmap, GenerateRoadmap, Id, ListRoadmaps, UpdateRoadmap};
pub use repair::repair;
pub use service::{RoadmapService, RoadmapServiceBuilder};
