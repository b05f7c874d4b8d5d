//! Roadmap model definitions.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Link, Step};

/// Default title for roadmaps whose model output carried none.
pub const DEFAULT_TITLE: &str = "Untitled Roadmap";

/// Default difficulty rating.
pub const DEFAULT_DIFFICULTY: &str = "beginner";

/// Default category.
pub const DEFAULT_CATEGORY: &str = "general";

/// The canonical, fully-defaulted roadmap content produced by the
/// normalizer — not yet persisted, so it carries no id or timestamps.
///
/// Every field is always populated: scalars fall back to their documented
/// defaults and `nodes`/`edges` are empty rather than absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadmapDraft {
    /// Display title of the roadmap
    pub title: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Ordered steps; the order is the roadmap's sequence
    #[serde(default)]
    pub nodes: Vec<Step>,

    /// Directed connectors between steps
    #[serde(default)]
    pub edges: Vec<Link>,

    /// Rough total duration as free text
    #[serde(rename = "estimatedTotalDuration", default)]
    pub estimated_total_duration: String,

    /// Difficulty rating as free text
    #[serde(default)]
    pub difficulty: String,

    /// Subject category as free text
    #[serde(default)]
    pub category: String,
}

/// Represents a persisted roadmap with storage-assigned metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Roadmap {
    /// Unique identifier, assigned by the storage layer on creation
    pub id: u64,

    /// Identity of the user the roadmap belongs to
    pub owner: String,

    /// Display title of the roadmap
    pub title: String,

    /// Free-text description
    pub description: String,

    /// Ordered steps; the order is the roadmap's sequence
    #[serde(default)]
    pub nodes: Vec<Step>,

    /// Directed connectors between steps
    #[serde(default)]
    pub edges: Vec<Link>,

    /// Rough total duration as free text
    #[serde(rename = "estimatedTotalDuration")]
    pub estimated_total_duration: String,

    /// Difficulty rating as free text
    pub difficulty: String,

    /// Subject category as free text
    pub category: String,

    /// Timestamp when the roadmap was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the roadmap was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Roadmap {
    /// Returns the persisted content as a draft, discarding the
    /// storage-assigned metadata. Used when duplicating a roadmap.
    pub fn to_draft(&self) -> RoadmapDraft {
        RoadmapDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            estimated_total_duration: self.estimated_total_duration.clone(),
            difficulty: self.difficulty.clone(),
            category: self.category.clone(),
        }
    }
}
