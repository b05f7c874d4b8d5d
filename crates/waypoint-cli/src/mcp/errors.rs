//! Error handling utilities for MCP server
//!
//! Service errors carry a typed [`ErrorKind`]; the mapping to a protocol
//! error is a fixed table keyed on that kind. Error messages are free to
//! change without affecting how callers see failures.

use rmcp::ErrorData;
use waypoint_core::{ErrorKind, RoadmapError};

/// Convert a service error to an MCP error using its typed kind.
pub fn to_mcp_error(message: &str, error: &RoadmapError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error.kind() {
        ErrorKind::InvalidInput => ErrorData::invalid_params(text, None),
        ErrorKind::NotFound => ErrorData::invalid_params(text, None),
        ErrorKind::MalformedResponse
        | ErrorKind::EmptyRoadmap
        | ErrorKind::Unauthorized
        | ErrorKind::Internal => ErrorData::internal_error(text, None),
    }
}
