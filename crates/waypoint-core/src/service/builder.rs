//! Builder for creating and configuring RoadmapService instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::RoadmapService;
use crate::{
    db::Database,
    error::{Result, RoadmapError},
};

/// Builder for creating and configuring RoadmapService instances.
#[derive(Debug, Clone)]
pub struct RoadmapServiceBuilder {
    database_path: Option<PathBuf>,
}

impl RoadmapServiceBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/waypoint/waypoint.db` or
    /// `~/.local/share/waypoint/waypoint.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured service instance.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::FileSystem` if the database path is invalid
    /// Returns `RoadmapError::Database` if database initialization fails
    pub async fn build(self) -> Result<RoadmapService> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| RoadmapError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        // Open once up front so schema problems surface at startup.
        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), RoadmapError>(())
        })
        .await
        .map_err(|e| RoadmapError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(RoadmapService::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("waypoint")
            .place_data_file("waypoint.db")
            .map_err(|e| RoadmapError::XdgDirectory(e.to_string()))
    }
}

impl Default for RoadmapServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
