//! High-level service API for generating and managing roadmaps.
//!
//! This module provides the main [`RoadmapService`] interface. The service
//! coordinates the response-repair and normalization core with the storage
//! layer, implementing the generate pipeline and the roadmap management
//! operations.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (roadmap_       │───▶│ (roadmap_ops)   │───▶│   (via db/)     │
//! │  handlers)      │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     User Interface      Business Logic         Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`RoadmapService`] instances
//! - [`roadmap_handlers`]: High-level operations returning display wrappers
//! - [`roadmap_ops`]: Model-returning operations and the generate pipeline
//!
//! ## Design Principles
//!
//! 1. **Explicit auth**: every operation takes an [`AuthContext`]
//!    parameter; nothing is read from global state
//! 2. **Async First**: blocking SQLite work runs on `spawn_blocking`
//! 3. **Terminal failures**: a malformed or empty model response aborts
//!    the whole request; no partial roadmap is persisted
//!
//! # Usage
//!
//! ```rust,no_run
//! use waypoint_core::{auth::AuthContext, params::GenerateRoadmap, RoadmapServiceBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = RoadmapServiceBuilder::new().build().await?;
//! let auth = AuthContext::new("alice");
//!
//! let roadmap = service
//!     .generate_roadmap(
//!         &auth,
//!         &GenerateRoadmap {
//!             raw_response: r#"{"title":"Learn Go","steps":["Read docs","Build a CLI"]}"#
//!                 .to_string(),
//!             title_hint: None,
//!         },
//!     )
//!     .await?;
//! assert_eq!(roadmap.nodes.len(), 2);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::auth::AuthContext;

// Module declarations
pub mod builder;
pub mod roadmap_handlers;
pub mod roadmap_ops;


// Re-export the main types
pub use builder::RoadmapServiceBuilder;

/// Main service interface for generating and managing roadmaps.
pub struct RoadmapService {
    pub(crate) db_path: PathBuf,
}

impl RoadmapService {
    /// Creates a new service with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Returns the owner key for the given auth context.
    pub(crate) fn owner(auth: &AuthContext) -> String {
        auth.user_id.clone()
    }
}
