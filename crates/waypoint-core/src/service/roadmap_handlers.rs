//! Roadmap handler operations that return formatted wrapper types.
//!
//! These sit above [`roadmap_ops`](super::roadmap_ops) and package results
//! for interface layers (CLI, MCP), mirroring the ops/handlers split of
//! the service architecture.

use super::RoadmapService;
use crate::{
    auth::AuthContext,
    display::{CreateResult, RoadmapSummaries, UpdateResult},
    error::{Result, RoadmapError},
    models::{Roadmap, RoadmapFilter, RoadmapSummary},
    params::{DeleteRoadmap, GenerateRoadmap, Id, ListRoadmaps, UpdateRoadmap},
};

impl RoadmapService {
    /// Handle generating a roadmap from a raw completion, returning a
    /// creation result wrapper for display.
    pub async fn generate_roadmap_result(
        &self,
        auth: &AuthContext,
        params: &GenerateRoadmap,
    ) -> Result<CreateResult<Roadmap>> {
        let roadmap = self.generate_roadmap(auth, params).await?;
        Ok(CreateResult::new(roadmap))
    }

    /// Handle listing roadmaps as summaries for consistent list display
    /// across interfaces.
    pub async fn list_roadmaps_summary(
        &self,
        auth: &AuthContext,
        params: &ListRoadmaps,
    ) -> Result<RoadmapSummaries> {
        let filter = Some(RoadmapFilter::from(params));
        let roadmaps = self.list_roadmaps(auth, filter).await?;
        let summaries: Vec<RoadmapSummary> = roadmaps.iter().map(Into::into).collect();
        Ok(RoadmapSummaries(summaries))
    }

    /// Handle showing a complete roadmap with its steps and links.
    pub async fn show_roadmap(&self, auth: &AuthContext, params: &Id) -> Result<Option<Roadmap>> {
        self.get_roadmap(auth, params).await
    }

    /// Handle editing roadmap metadata, tracking the changes made.
    pub async fn update_roadmap_result(
        &self,
        auth: &AuthContext,
        params: &UpdateRoadmap,
    ) -> Result<UpdateResult<Roadmap>> {
        let mut changes = Vec::new();
        if let Some(ref title) = params.title {
            changes.push(format!("Title set to \"{title}\""));
        }
        if params.description.is_some() {
            changes.push("Description updated".to_string());
        }

        let roadmap = self.update_roadmap(auth, params).await?;
        Ok(UpdateResult::with_changes(roadmap, changes))
    }

    /// Handle duplicating a roadmap, returning the copy as a creation
    /// result.
    pub async fn duplicate_roadmap_result(
        &self,
        auth: &AuthContext,
        params: &Id,
    ) -> Result<CreateResult<Roadmap>> {
        let copy = self.duplicate_roadmap(auth, params).await?;
        Ok(CreateResult::new(copy))
    }

    /// Handle permanently deleting a roadmap with confirmation.
    ///
    /// Uses get-before-delete so the removed roadmap can be echoed back.
    /// Requires the explicit `confirmed` flag; returns
    /// [`RoadmapError::InvalidInput`] without it.
    pub async fn delete_roadmap(
        &self,
        auth: &AuthContext,
        params: &DeleteRoadmap,
    ) -> Result<Option<Roadmap>> {
        if !params.confirmed {
            return Err(RoadmapError::invalid_input(
                "confirmed",
                "Roadmap deletion requires explicit confirmation. \
                 Set 'confirmed' to true to proceed with permanent deletion.",
            ));
        }

        let id_params = Id { id: params.id };
        let roadmap = self.get_roadmap(auth, &id_params).await?;

        if roadmap.is_some() {
            self.delete_roadmap_by_id(auth, &id_params).await?;
        }

        Ok(roadmap)
    }
}
