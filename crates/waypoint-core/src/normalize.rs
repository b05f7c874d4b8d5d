//! Normalization of loosely-typed model output into canonical roadmaps.
//!
//! Model output varies wildly even when the JSON parses: steps arrive as
//! bare strings or partial objects, edges are missing, scalar fields are
//! absent or the wrong type. [`normalize`] is a total function over any
//! parsed JSON value — it never fails, repairing every irregularity
//! field-by-field with documented defaults. The caller decides whether a
//! zero-step result is acceptable (see
//! [`RoadmapError::EmptyRoadmap`](crate::RoadmapError::EmptyRoadmap)).

use serde_json::Value;

use crate::models::{
    Link, RoadmapDraft, Step, StepKind, DEFAULT_CATEGORY, DEFAULT_DIFFICULTY, DEFAULT_TITLE,
    SEQUENCING_LABEL,
};

/// Produces a canonical [`RoadmapDraft`] from any parsed JSON value.
///
/// Node resolution prefers a `nodes` array, then falls back to a `steps`
/// array whose entries may be bare strings (used as titles) or partial
/// objects. Missing step ids are synthesized as `step_<n>` (1-based).
/// When the input supplies no edges at all, a linear chain labeled
/// "Then" is generated over consecutive nodes.
///
/// Normalizing an already-canonical roadmap is a no-op.
pub fn normalize(parsed: &Value) -> RoadmapDraft {
    let nodes = resolve_nodes(parsed);
    let edges = resolve_edges(parsed, &nodes);

    RoadmapDraft {
        title: string_field(parsed, "title", DEFAULT_TITLE),
        description: string_field(parsed, "description", ""),
        nodes,
        edges,
        estimated_total_duration: string_field(parsed, "estimatedTotalDuration", ""),
        difficulty: string_field(parsed, "difficulty", DEFAULT_DIFFICULTY),
        category: string_field(parsed, "category", DEFAULT_CATEGORY),
    }
}

/// Resolves the node list from either a `nodes` or a `steps` array.
fn resolve_nodes(parsed: &Value) -> Vec<Step> {
    let entries = match (parsed.get("nodes"), parsed.get("steps")) {
        (Some(Value::Array(nodes)), _) => nodes,
        (_, Some(Value::Array(steps))) => steps,
        _ => return Vec::new(),
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| canonical_step(entry, index))
        .collect()
}

/// Maps one node/step entry into the canonical step shape.
///
/// A bare string becomes the step title; an object keeps whichever of its
/// own fields are usable and defaults the rest.
fn canonical_step(entry: &Value, index: usize) -> Step {
    let mut step = Step::at_position(index);

    match entry {
        Value::String(title) => {
            step.title = title.clone();
        }
        Value::Object(map) => {
            if let Some(Value::String(id)) = map.get("id") {
                step.id = id.clone();
            }
            if let Some(Value::String(title)) = map.get("title") {
                step.title = title.clone();
            }
            if let Some(Value::String(description)) = map.get("description") {
                step.description = description.clone();
            }
            if let Some(Value::String(duration)) = map.get("duration") {
                step.duration = duration.clone();
            }
            if let Some(Value::String(kind)) = map.get("type") {
                step.kind = kind.parse().unwrap_or(StepKind::Task);
            }
            if let Some(Value::Array(resources)) = map.get("resources") {
                step.resources = resources
                    .iter()
                    .filter_map(|r| r.as_str().map(String::from))
                    .collect();
            }
        }
        // Numbers, booleans, nulls: nothing usable, keep the defaults.
        _ => {}
    }

    step
}

/// Resolves the edge list, synthesizing a linear chain when the input
/// supplied no edges (absent, not an array, or zero-length).
fn resolve_edges(parsed: &Value, nodes: &[Step]) -> Vec<Link> {
    if let Some(Value::Array(edges)) = parsed.get("edges") {
        if !edges.is_empty() {
            return edges.iter().map(canonical_link).collect();
        }
    }

    nodes
        .windows(2)
        .map(|pair| Link::sequencing(pair[0].id.clone(), pair[1].id.clone()))
        .collect()
}

/// Maps one supplied edge entry into the canonical link shape.
///
/// Supplied edges pass through without cross-validation against node ids;
/// only missing fields are defaulted.
fn canonical_link(entry: &Value) -> Link {
    Link {
        source: entry
            .get("source")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        target: entry
            .get("target")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        label: entry
            .get("label")
            .and_then(Value::as_str)
            .unwrap_or(SEQUENCING_LABEL)
            .to_string(),
    }
}

/// Extracts a string field, falling back to the default when the field is
/// absent or not a string.
fn string_field(parsed: &Value, key: &str, default: &str) -> String {
    parsed
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}
