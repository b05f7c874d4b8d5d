//! Command handlers bridging parsed arguments and the service layer.
//!
//! Each handler converts its clap argument struct into the core parameter
//! type, calls the service, and renders the returned display wrapper. All
//! output goes through [`TerminalRenderer`] so rich and plain modes stay
//! consistent.

use std::io::Read;

use anyhow::{Context, Result};
use waypoint_core::{
    display::{DeleteResult, OperationStatus},
    params::GenerateRoadmap,
    AuthContext, RoadmapService,
};

use crate::{
    args::{DeleteArgs, DuplicateArgs, EditArgs, GenerateArgs, ListArgs, ShowArgs},
    renderer::TerminalRenderer,
};

/// Runtime context for executing CLI commands.
pub struct Cli {
    service: RoadmapService,
    renderer: TerminalRenderer,
    auth: AuthContext,
}

impl Cli {
    /// Create a new CLI context.
    pub fn new(service: RoadmapService, renderer: TerminalRenderer, auth: AuthContext) -> Self {
        Self {
            service,
            renderer,
            auth,
        }
    }

    /// Generate a roadmap from a raw model response read from a file or
    /// stdin.
    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let raw_response = match args.file {
            Some(path) => std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read response from stdin")?;
                buffer
            }
        };

        let result = self
            .service
            .generate_roadmap_result(
                &self.auth,
                &GenerateRoadmap {
                    raw_response,
                    title_hint: args.title_hint,
                },
            )
            .await?;
        self.renderer.render(&result.to_string())
    }

    /// List roadmaps, optionally filtered by category or difficulty.
    pub async fn list(&self, args: ListArgs) -> Result<()> {
        let summaries = self
            .service
            .list_roadmaps_summary(&self.auth, &args.into())
            .await?;

        let output = if summaries.is_empty() {
            summaries.to_string()
        } else {
            format!("# Roadmaps\n\n{summaries}")
        };
        self.renderer.render(&output)
    }

    /// Show a roadmap with all its steps and sequence links.
    pub async fn show(&self, args: ShowArgs) -> Result<()> {
        let id = args.id;
        match self.service.show_roadmap(&self.auth, &args.into()).await? {
            Some(roadmap) => self.renderer.render(&roadmap.to_string()),
            None => {
                let status = OperationStatus::failure(format!("Roadmap with ID {id} not found"));
                self.renderer.render(&status.to_string())
            }
        }
    }

    /// Edit a roadmap's title or description.
    pub async fn edit(&self, args: EditArgs) -> Result<()> {
        let result = self
            .service
            .update_roadmap_result(&self.auth, &args.into())
            .await?;
        self.renderer.render(&result.to_string())
    }

    /// Duplicate a roadmap under a "(copy)" title.
    pub async fn duplicate(&self, args: DuplicateArgs) -> Result<()> {
        let result = self
            .service
            .duplicate_roadmap_result(&self.auth, &args.into())
            .await?;
        self.renderer.render(&result.to_string())
    }

    /// Permanently delete a roadmap. Requires the --confirm flag.
    pub async fn delete(&self, args: DeleteArgs) -> Result<()> {
        let id = args.id;
        match self.service.delete_roadmap(&self.auth, &args.into()).await? {
            Some(roadmap) => self.renderer.render(&DeleteResult::new(roadmap).to_string()),
            None => {
                let status = OperationStatus::failure(format!("Roadmap with ID {id} not found"));
                self.renderer.render(&status.to_string())
            }
        }
    }
}
