//! Database operations and SQLite management for roadmaps.
//!
//! This module provides the single storage-client implementation for the
//! Waypoint roadmap system. It handles SQLite connections, schema
//! management, and owner-scoped roadmap queries. Roadmaps persist as
//! document rows: scalar metadata in columns, the step and link sequences
//! as JSON text.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod roadmap_queries;
pub mod rows;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
