//! Roadmap CRUD operations and queries.
//!
//! Every query is scoped to an owner: a roadmap is only visible to the
//! user it belongs to. The owner value comes from the caller's
//! [`AuthContext`](crate::auth::AuthContext) and is never read from
//! process-global state.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::rows::{map_roadmap_row, ROADMAP_COLUMNS};
use crate::{
    error::{DatabaseResultExt, Result, RoadmapError},
    models::{Roadmap, RoadmapDraft, RoadmapFilter},
};

const INSERT_ROADMAP_SQL: &str = "INSERT INTO roadmaps (owner, title, description, nodes, edges, \
     estimated_total_duration, difficulty, category, created_at, updated_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const DELETE_ROADMAP_SQL: &str = "DELETE FROM roadmaps WHERE id = ?1 AND owner = ?2";

impl super::Database {
    /// Persists a normalized draft for the given owner, assigning the id
    /// and both timestamps.
    pub fn create_roadmap(&mut self, owner: &str, draft: &RoadmapDraft) -> Result<Roadmap> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();
        let nodes_json = serde_json::to_string(&draft.nodes)?;
        let edges_json = serde_json::to_string(&draft.edges)?;

        tx.execute(
            INSERT_ROADMAP_SQL,
            params![
                owner,
                &draft.title,
                &draft.description,
                &nodes_json,
                &edges_json,
                &draft.estimated_total_duration,
                &draft.difficulty,
                &draft.category,
                &now_str,
                &now_str,
            ],
        )
        .map_err(|e| RoadmapError::database("Failed to insert roadmap", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Roadmap {
            id,
            owner: owner.to_string(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            nodes: draft.nodes.clone(),
            edges: draft.edges.clone(),
            estimated_total_duration: draft.estimated_total_duration.clone(),
            difficulty: draft.difficulty.clone(),
            category: draft.category.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves one of the owner's roadmaps by ID.
    pub fn get_roadmap(&self, owner: &str, id: u64) -> Result<Option<Roadmap>> {
        let sql = format!("SELECT {ROADMAP_COLUMNS} FROM roadmaps WHERE id = ?1 AND owner = ?2");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .map_err(|e| RoadmapError::database("Failed to prepare query", e))?;

        stmt.query_row(params![id as i64, owner], map_roadmap_row)
            .optional()
            .map_err(|e| RoadmapError::database("Failed to query roadmap", e))
    }

    /// Lists the owner's roadmaps with optional filtering, newest first.
    pub fn list_roadmaps(&self, owner: &str, filter: Option<&RoadmapFilter>) -> Result<Vec<Roadmap>> {
        let mut query = format!("SELECT {ROADMAP_COLUMNS} FROM roadmaps WHERE owner = ?");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(owner.to_string())];

        if let Some(f) = filter {
            if let Some(ref title) = f.title_contains {
                query.push_str(" AND title LIKE ?");
                params_vec.push(Box::new(format!("%{title}%")));
            }
            if let Some(ref category) = f.category {
                query.push_str(" AND category = ?");
                params_vec.push(Box::new(category.clone()));
            }
            if let Some(ref difficulty) = f.difficulty {
                query.push_str(" AND difficulty = ?");
                params_vec.push(Box::new(difficulty.clone()));
            }
            if let Some(ref after) = f.created_after {
                query.push_str(" AND created_at >= ?");
                params_vec.push(Box::new(after.to_string()));
            }
            if let Some(ref before) = f.created_before {
                query.push_str(" AND created_at <= ?");
                params_vec.push(Box::new(before.to_string()));
            }
        }

        query.push_str(" ORDER BY created_at DESC, id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| RoadmapError::database("Failed to prepare list query", e))?;

        let param_refs: Vec<&dyn rusqlite::ToSql> =
            params_vec.iter().map(std::convert::AsRef::as_ref).collect();
        let rows = stmt
            .query_map(param_refs.as_slice(), map_roadmap_row)
            .map_err(|e| RoadmapError::database("Failed to query roadmaps", e))?;

        let mut roadmaps = Vec::new();
        for row in rows {
            roadmaps.push(row.map_err(|e| RoadmapError::database("Failed to map roadmap row", e))?);
        }

        Ok(roadmaps)
    }

    /// Updates metadata fields of one of the owner's roadmaps and bumps
    /// `updated_at`. Returns the updated roadmap, or `None` when the
    /// roadmap does not exist for this owner.
    pub fn update_roadmap(
        &mut self,
        owner: &str,
        id: u64,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<Roadmap>> {
        if title.is_none() && description.is_none() {
            return self.get_roadmap(owner, id);
        }

        let mut assignments = vec!["updated_at = ?".to_string()];
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> =
            vec![Box::new(Timestamp::now().to_string())];

        if let Some(title) = title {
            assignments.push("title = ?".to_string());
            params_vec.push(Box::new(title.to_string()));
        }
        if let Some(description) = description {
            assignments.push("description = ?".to_string());
            params_vec.push(Box::new(description.to_string()));
        }

        params_vec.push(Box::new(id as i64));
        params_vec.push(Box::new(owner.to_string()));

        let sql = format!(
            "UPDATE roadmaps SET {} WHERE id = ? AND owner = ?",
            assignments.join(", ")
        );

        let param_refs: Vec<&dyn rusqlite::ToSql> =
            params_vec.iter().map(std::convert::AsRef::as_ref).collect();
        self.connection
            .execute(&sql, param_refs.as_slice())
            .map_err(|e| RoadmapError::database("Failed to update roadmap", e))?;

        self.get_roadmap(owner, id)
    }

    /// Permanently deletes one of the owner's roadmaps.
    ///
    /// Returns `true` when a row was removed.
    pub fn delete_roadmap(&mut self, owner: &str, id: u64) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_ROADMAP_SQL, params![id as i64, owner])
            .map_err(|e| RoadmapError::database("Failed to delete roadmap", e))?;
        Ok(removed > 0)
    }
}
