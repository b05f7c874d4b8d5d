//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create, update,
//! and delete operations with consistent messaging and resource display.

use std::fmt;

use crate::models::Roadmap;

/// Wrapper type for displaying the result of create operations.
///
/// Formats creation results with a success message naming the new
/// resource ID followed by the full resource rendering.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Roadmap> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created roadmap with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Can track and display the specific changes made during the update so
/// interfaces can report exactly what was modified.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Roadmap> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated roadmap with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
///
/// Confirms the deletion and identifies the removed resource by title
/// and ID.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Roadmap> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted roadmap '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::Roadmap;

    fn sample_roadmap() -> Roadmap {
        Roadmap {
            id: 7,
            owner: "local".to_string(),
            title: "Learn Rust".to_string(),
            description: String::new(),
            nodes: vec![],
            edges: vec![],
            estimated_total_duration: String::new(),
            difficulty: "beginner".to_string(),
            category: "general".to_string(),
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    #[test]
    fn create_result_names_the_id() {
        let result = CreateResult::new(sample_roadmap());
        assert!(format!("{result}").starts_with("Created roadmap with ID: 7"));
    }

    #[test]
    fn update_result_lists_changes() {
        let result = UpdateResult::with_changes(
            sample_roadmap(),
            vec!["Updated title".to_string(), "Updated description".to_string()],
        );
        let output = format!("{result}");
        assert!(output.contains("Changes made:"));
        assert!(output.contains("- Updated title"));
        assert!(output.contains("- Updated description"));
    }

    #[test]
    fn update_result_without_changes_skips_section() {
        let result = UpdateResult::new(sample_roadmap());
        assert!(!format!("{result}").contains("Changes made:"));
    }

    #[test]
    fn delete_result_names_title_and_id() {
        let result = DeleteResult::new(sample_roadmap());
        assert_eq!(format!("{result}"), "Deleted roadmap 'Learn Rust' (ID: 7)\n");
    }
}
