//! Row mapping helpers for document-style roadmap rows.

use jiff::Timestamp;
use rusqlite::types::Type;
use rusqlite::Row;

use crate::models::{Link, Roadmap, Step};

/// Column order shared by every roadmap SELECT in this module's siblings.
pub(super) const ROADMAP_COLUMNS: &str = "id, owner, title, description, nodes, edges, \
     estimated_total_duration, difficulty, category, created_at, updated_at";

/// Maps a full roadmap row (in [`ROADMAP_COLUMNS`] order) to the model.
///
/// JSON and timestamp columns that fail to parse surface as
/// [`rusqlite::Error::FromSqlConversionFailure`] so the caller's error
/// context applies.
pub(super) fn map_roadmap_row(row: &Row<'_>) -> rusqlite::Result<Roadmap> {
    let nodes: Vec<Step> = json_column(row, 4)?;
    let edges: Vec<Link> = json_column(row, 5)?;

    Ok(Roadmap {
        id: row.get::<_, i64>(0)? as u64,
        owner: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        nodes,
        edges,
        estimated_total_duration: row.get(6)?,
        difficulty: row.get(7)?,
        category: row.get(8)?,
        created_at: timestamp_column(row, 9)?,
        updated_at: timestamp_column(row, 10)?,
    })
}

/// Deserializes a JSON text column into a typed sequence.
fn json_column<T: serde::de::DeserializeOwned>(
    row: &Row<'_>,
    index: usize,
) -> rusqlite::Result<T> {
    let text: String = row.get(index)?;
    serde_json::from_str(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Parses an RFC 3339 timestamp column.
fn timestamp_column(row: &Row<'_>, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}
