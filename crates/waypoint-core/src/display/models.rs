//! Display implementations for domain models.
//!
//! Kept separate from the model definitions to maintain the split between
//! data structures and presentation. All output is markdown suitable for
//! the terminal renderer and the MCP text surface.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Link, Roadmap, RoadmapSummary, Step, StepKind};

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Roadmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Difficulty: {}", self.difficulty)?;
        writeln!(f, "- Category: {}", self.category)?;
        if !self.estimated_total_duration.is_empty() {
            writeln!(f, "- Estimated duration: {}", self.estimated_total_duration)?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        if self.nodes.is_empty() {
            writeln!(f, "\nNo steps in this roadmap.")?;
            return Ok(());
        }

        writeln!(f, "\n## Steps")?;
        writeln!(f)?;
        for (position, step) in self.nodes.iter().enumerate() {
            step.fmt_step(f, position + 1)?;
        }

        if !self.edges.is_empty() {
            writeln!(f, "## Sequence")?;
            writeln!(f)?;
            for link in &self.edges {
                writeln!(f, "- {link}")?;
            }
        }

        Ok(())
    }
}

impl Step {
    /// Formats the step compactly with its 1-based position.
    fn fmt_step(&self, f: &mut fmt::Formatter<'_>, position: usize) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            position,
            self.title,
            self.kind.with_icon()
        )?;
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }

        if !self.duration.is_empty() {
            writeln!(f, "Duration: {}", self.duration)?;
            writeln!(f)?;
        }

        if !self.resources.is_empty() {
            writeln!(f, "#### Resources")?;
            writeln!(f)?;
            for resource in &self.resources {
                writeln!(f, "- {resource}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.kind.with_icon())?;
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        Ok(())
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {} ({})", self.source, self.target, self.label)
    }
}

impl fmt::Display for RoadmapSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {}. {} [{} / {}]",
            self.id, self.title, self.difficulty, self.category
        )?;
        writeln!(f)?;
        writeln!(f, "- Steps: {}", self.total_steps)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::models::*;

    fn sample_roadmap() -> Roadmap {
        Roadmap {
            id: 1,
            owner: "tester".to_string(),
            title: "Learn Go".to_string(),
            description: "From zero to a working CLI".to_string(),
            nodes: vec![
                Step {
                    id: "step_1".to_string(),
                    title: "Read docs".to_string(),
                    description: String::new(),
                    duration: "1 week".to_string(),
                    kind: StepKind::Task,
                    resources: vec!["https://go.dev/doc".to_string()],
                },
                Step {
                    id: "step_2".to_string(),
                    title: "Build a CLI".to_string(),
                    description: String::new(),
                    duration: String::new(),
                    kind: StepKind::Milestone,
                    resources: Vec::new(),
                },
            ],
            edges: vec![Link::sequencing("step_1", "step_2")],
            estimated_total_duration: "1 month".to_string(),
            difficulty: "beginner".to_string(),
            category: "general".to_string(),
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    #[test]
    fn roadmap_display_includes_header_and_steps() {
        let output = format!("{}", sample_roadmap());
        assert!(output.contains("# 1. Learn Go"));
        assert!(output.contains("### 1. Read docs (○ Task)"));
        assert!(output.contains("### 2. Build a CLI (◆ Milestone)"));
        assert!(output.contains("- https://go.dev/doc"));
        assert!(output.contains("step_1 → step_2 (Then)"));
    }

    #[test]
    fn empty_roadmap_display_mentions_no_steps() {
        let mut roadmap = sample_roadmap();
        roadmap.nodes.clear();
        roadmap.edges.clear();
        let output = format!("{roadmap}");
        assert!(output.contains("No steps in this roadmap."));
    }

    #[test]
    fn summary_display_is_compact() {
        let summary = RoadmapSummary::from(&sample_roadmap());
        let output = format!("{summary}");
        assert!(output.contains("## 1. Learn Go [beginner / general]"));
        assert!(output.contains("- Steps: 2"));
    }
}
