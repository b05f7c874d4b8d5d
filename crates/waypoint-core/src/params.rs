//! Parameter structures for Waypoint operations
//!
//! Shared parameter structures used across interfaces (CLI, MCP) without
//! framework-specific derives baked in. Interface layers wrap these types
//! to add their own derives (clap arguments, JSON schemas) and convert via
//! `From`/`Into`, keeping the core layer framework-agnostic:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation lives behind the `schema` feature so the core
//! stays lightweight for library consumers.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_roadmap and duplicate_roadmap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the roadmap to operate on
    pub id: u64,
}

/// Parameters for generating a roadmap from a raw model completion.
///
/// The completion text is produced by an external generator call the
/// caller has already made; this operation only repairs, normalizes, and
/// persists it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GenerateRoadmap {
    /// Raw text returned by the text-generation call (may be bare JSON,
    /// JSON in a markdown fence, or JSON surrounded by prose)
    pub raw_response: String,
    /// Title to use when the response itself carries no title string.
    /// A title supplied by the response always wins over the hint.
    pub title_hint: Option<String>,
}

/// Parameters for listing roadmaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListRoadmaps {
    /// Only list roadmaps with this exact category
    pub category: Option<String>,
    /// Only list roadmaps with this exact difficulty
    pub difficulty: Option<String>,
}

/// Parameters for editing a roadmap's metadata.
///
/// Only the provided fields change; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateRoadmap {
    /// The ID of the roadmap to update
    pub id: u64,
    /// New title for the roadmap
    pub title: Option<String>,
    /// New description for the roadmap
    pub description: Option<String>,
}

/// Parameters for permanently deleting a roadmap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteRoadmap {
    /// The ID of the roadmap to delete
    pub id: u64,
    /// Explicit confirmation flag; deletion fails without it
    pub confirmed: bool,
}
