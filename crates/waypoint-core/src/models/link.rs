//! Link model definition.

use serde::{Deserialize, Serialize};

/// Default annotation for auto-generated sequencing links.
pub const SEQUENCING_LABEL: &str = "Then";

/// A directed, annotated connector between two steps of the same roadmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    /// Id of the step the link starts at
    #[serde(default)]
    pub source: String,

    /// Id of the step the link points to
    #[serde(default)]
    pub target: String,

    /// Free-text annotation, e.g. "Then"
    #[serde(default = "default_label")]
    pub label: String,
}

fn default_label() -> String {
    SEQUENCING_LABEL.to_string()
}

impl Link {
    /// Creates a link carrying the default sequencing label.
    pub fn sequencing(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: SEQUENCING_LABEL.to_string(),
        }
    }
}
