//! Roadmap operations for the RoadmapService.
//!
//! Model-returning operations, including the generate pipeline that runs
//! the repair and normalization core before persisting. Blocking SQLite
//! work runs on `spawn_blocking`; the repair/normalize core itself is a
//! pure in-memory computation and runs inline.

use serde_json::Value;
use tokio::task;

use super::RoadmapService;
use crate::{
    auth::AuthContext,
    db::Database,
    error::{Result, RoadmapError},
    models::{Roadmap, RoadmapDraft, RoadmapFilter},
    normalize::normalize,
    params::{GenerateRoadmap, Id, UpdateRoadmap},
    repair::repair,
};

impl RoadmapService {
    /// Generates and persists a roadmap from a raw model completion.
    ///
    /// Pipeline: repair → normalize → zero-step check → persist. Both
    /// failure conditions (no extractable JSON, zero normalized steps)
    /// are terminal: nothing is written.
    ///
    /// When the completion carries no title string, `title_hint` supplies
    /// the title instead of the generic default. A title present in the
    /// completion always wins over the hint.
    pub async fn generate_roadmap(
        &self,
        auth: &AuthContext,
        params: &GenerateRoadmap,
    ) -> Result<Roadmap> {
        let parsed = repair(&params.raw_response)?;
        let mut draft = normalize(&parsed);

        // The normalizer is total by design; the emptiness policy lives
        // here at the caller level.
        if draft.nodes.is_empty() {
            return Err(RoadmapError::EmptyRoadmap);
        }

        if let Some(hint) = params.title_hint.as_deref() {
            let response_has_title = parsed.get("title").and_then(Value::as_str).is_some();
            if !response_has_title && !hint.is_empty() {
                draft.title = hint.to_string();
            }
        }

        self.create_roadmap(auth, draft).await
    }

    /// Persists an already-normalized draft for the authenticated user.
    pub async fn create_roadmap(&self, auth: &AuthContext, draft: RoadmapDraft) -> Result<Roadmap> {
        let db_path = self.db_path.clone();
        let owner = Self::owner(auth);

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_roadmap(&owner, &draft)
        })
        .await
        .map_err(|e| RoadmapError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves one of the user's roadmaps by ID.
    pub async fn get_roadmap(&self, auth: &AuthContext, params: &Id) -> Result<Option<Roadmap>> {
        let db_path = self.db_path.clone();
        let owner = Self::owner(auth);
        let roadmap_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_roadmap(&owner, roadmap_id)
        })
        .await
        .map_err(|e| RoadmapError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists the user's roadmaps with optional filtering.
    pub async fn list_roadmaps(
        &self,
        auth: &AuthContext,
        filter: Option<RoadmapFilter>,
    ) -> Result<Vec<Roadmap>> {
        let db_path = self.db_path.clone();
        let owner = Self::owner(auth);

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_roadmaps(&owner, filter.as_ref())
        })
        .await
        .map_err(|e| RoadmapError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Updates metadata of one of the user's roadmaps.
    ///
    /// Returns [`RoadmapError::RoadmapNotFound`] when the roadmap does not
    /// exist for this user.
    pub async fn update_roadmap(
        &self,
        auth: &AuthContext,
        params: &UpdateRoadmap,
    ) -> Result<Roadmap> {
        let db_path = self.db_path.clone();
        let owner = Self::owner(auth);
        let id = params.id;
        let title = params.title.clone();
        let description = params.description.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_roadmap(&owner, id, title.as_deref(), description.as_deref())
        })
        .await
        .map_err(|e| RoadmapError::Configuration {
            message: format!("Task join error: {e}"),
        })??
        .ok_or(RoadmapError::RoadmapNotFound { id: params.id })
    }

    /// Duplicates one of the user's roadmaps.
    ///
    /// The copy gets a new id, fresh timestamps, and a "(copy)" title
    /// suffix; the step and link content is carried over verbatim.
    pub async fn duplicate_roadmap(&self, auth: &AuthContext, params: &Id) -> Result<Roadmap> {
        let original = self
            .get_roadmap(auth, params)
            .await?
            .ok_or(RoadmapError::RoadmapNotFound { id: params.id })?;

        let mut draft = original.to_draft();
        draft.title = format!("{} (copy)", draft.title);

        self.create_roadmap(auth, draft).await
    }

    /// Permanently deletes one of the user's roadmaps.
    ///
    /// Returns `true` when a roadmap was removed.
    pub async fn delete_roadmap_by_id(&self, auth: &AuthContext, params: &Id) -> Result<bool> {
        let db_path = self.db_path.clone();
        let owner = Self::owner(auth);
        let roadmap_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_roadmap(&owner, roadmap_id)
        })
        .await
        .map_err(|e| RoadmapError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
