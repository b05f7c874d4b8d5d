//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result, RoadmapError};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Databases created before difficulty/category were tracked lack
        // those columns; add them with their documented defaults.
        for (column, definition) in [
            ("difficulty", "TEXT NOT NULL DEFAULT 'beginner'"),
            ("category", "TEXT NOT NULL DEFAULT 'general'"),
        ] {
            let has_column: bool = self
                .connection
                .query_row(
                    "SELECT COUNT(*) FROM pragma_table_info('roadmaps') WHERE name = ?1",
                    [column],
                    |row| row.get(0),
                )
                .map(|count: i64| count > 0)
                .unwrap_or(false);

            if !has_column {
                self.connection
                    .execute(
                        &format!("ALTER TABLE roadmaps ADD COLUMN {column} {definition}"),
                        [],
                    )
                    .map_err(|e| {
                        RoadmapError::database(
                            format!("Failed to add {column} column to roadmaps table"),
                            e,
                        )
                    })?;
            }
        }

        Ok(())
    }
}
