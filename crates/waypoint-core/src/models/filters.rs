//! Filter types for roadmap listing queries.

use jiff::Timestamp;

/// Criteria for filtering roadmap listings.
///
/// All fields are optional; an empty filter matches every roadmap owned by
/// the requesting user. Filters combine with AND semantics.
#[derive(Debug, Clone, Default)]
pub struct RoadmapFilter {
    /// Match roadmaps whose title contains this substring
    pub title_contains: Option<String>,

    /// Match roadmaps with this exact category
    pub category: Option<String>,

    /// Match roadmaps with this exact difficulty
    pub difficulty: Option<String>,

    /// Match roadmaps created at or after this time
    pub created_after: Option<Timestamp>,

    /// Match roadmaps created at or before this time
    pub created_before: Option<Timestamp>,
}

impl From<&crate::params::ListRoadmaps> for RoadmapFilter {
    fn from(params: &crate::params::ListRoadmaps) -> Self {
        Self {
            title_contains: None,
            category: params.category.clone(),
            difficulty: params.difficulty.clone(),
            created_after: None,
            created_before: None,
        }
    }
}
