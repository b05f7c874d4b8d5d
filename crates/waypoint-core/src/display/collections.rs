//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::RoadmapSummary;

/// Newtype wrapper for displaying collections of roadmap summaries.
///
/// Handles empty collections gracefully and leaves title handling to the
/// consumer so each interface can frame the list its own way.
pub struct RoadmapSummaries(pub Vec<RoadmapSummary>);

impl RoadmapSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the summary at the given index.
    pub fn get(&self, index: usize) -> Option<&RoadmapSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, RoadmapSummary> {
        self.0.iter()
    }
}

impl Index<usize> for RoadmapSummaries {
    type Output = RoadmapSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for RoadmapSummaries {
    type Item = RoadmapSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for RoadmapSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No roadmaps found.");
        }
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    #[test]
    fn empty_collection_displays_placeholder() {
        let summaries = RoadmapSummaries(Vec::new());
        assert!(format!("{summaries}").contains("No roadmaps found."));
        assert!(summaries.is_empty());
    }

    #[test]
    fn collection_lists_every_summary() {
        let make = |id: u64, title: &str| RoadmapSummary {
            id,
            title: title.to_string(),
            description: String::new(),
            difficulty: "beginner".to_string(),
            category: "general".to_string(),
            total_steps: 0,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        };
        let summaries = RoadmapSummaries(vec![make(1, "First"), make(2, "Second")]);
        let output = format!("{summaries}");
        assert!(output.contains("First"));
        assert!(output.contains("Second"));
        assert_eq!(summaries.len(), 2);
    }
}
