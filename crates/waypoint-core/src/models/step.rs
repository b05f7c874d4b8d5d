//! Step model definition and related functionality.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Represents one stage within a roadmap.
///
/// Steps are embedded in their roadmap document rather than stored as
/// independent records; their `id` is unique only within the parent roadmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Identifier unique within the roadmap, e.g. `step_3`
    pub id: String,

    /// Brief title/summary of the step
    #[serde(default)]
    pub title: String,

    /// Detailed description of the step
    #[serde(default)]
    pub description: String,

    /// Rough duration estimate as free text (e.g. "2 weeks")
    #[serde(default)]
    pub duration: String,

    /// Kind of step (milestone, task, or resource)
    #[serde(rename = "type", default)]
    pub kind: StepKind,

    /// Links to relevant resources (URLs, book titles)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
}

impl Step {
    /// Creates a step with the synthesized id for the given 0-based position
    /// and all other fields defaulted.
    pub fn at_position(index: usize) -> Self {
        Self {
            id: format!("step_{}", index + 1),
            title: String::new(),
            description: String::new(),
            duration: String::new(),
            kind: StepKind::Task,
            resources: Vec::new(),
        }
    }
}

/// Type-safe enumeration of step kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// A significant checkpoint in the roadmap
    Milestone,

    /// A unit of work to complete
    #[default]
    Task,

    /// Supporting material to study
    Resource,
}

impl FromStr for StepKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "milestone" => Ok(StepKind::Milestone),
            "task" => Ok(StepKind::Task),
            "resource" => Ok(StepKind::Resource),
            _ => Err(format!("Invalid step kind: {s}")),
        }
    }
}

impl StepKind {
    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Milestone => "milestone",
            StepKind::Task => "task",
            StepKind::Resource => "resource",
        }
    }

    /// Get the kind with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use waypoint_core::models::StepKind;
    ///
    /// assert_eq!(StepKind::Milestone.with_icon(), "◆ Milestone");
    /// assert_eq!(StepKind::Task.with_icon(), "○ Task");
    /// assert_eq!(StepKind::Resource.with_icon(), "➤ Resource");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepKind::Milestone => "◆ Milestone",
            StepKind::Task => "○ Task",
            StepKind::Resource => "➤ Resource",
        }
    }
}
