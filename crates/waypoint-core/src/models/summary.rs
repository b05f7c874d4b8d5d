//! Roadmap summary types for list views.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Roadmap;

/// Summary information about a roadmap with step statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapSummary {
    /// Roadmap ID
    pub id: u64,
    /// Display title of the roadmap
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Difficulty rating
    pub difficulty: String,
    /// Subject category
    pub category: String,
    /// Total number of steps
    pub total_steps: u32,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
}

impl From<&Roadmap> for RoadmapSummary {
    fn from(roadmap: &Roadmap) -> Self {
        Self {
            id: roadmap.id,
            title: roadmap.title.clone(),
            description: roadmap.description.clone(),
            difficulty: roadmap.difficulty.clone(),
            category: roadmap.category.clone(),
            total_steps: roadmap.nodes.len() as u32,
            created_at: roadmap.created_at,
            updated_at: roadmap.updated_at,
        }
    }
}
