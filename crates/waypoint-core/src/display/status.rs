//! Outcome lines for operations that don't render a full roadmap.
//!
//! Lookups that miss and guarded deletions report back through
//! [`OperationStatus`] so the CLI and MCP surfaces print the same
//! one-line `Success:`/`Error:` prefix either way.

use std::fmt;

/// A one-line operation outcome with a success/error prefix.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{prefix} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status_prefixes_message() {
        let status = OperationStatus::success("Duplicated roadmap 'Learn Rust' as ID 7");
        assert_eq!(
            status.to_string(),
            "Success: Duplicated roadmap 'Learn Rust' as ID 7\n"
        );
    }

    #[test]
    fn test_failure_status_prefixes_message() {
        let status = OperationStatus::failure("Roadmap with ID 42 not found");
        assert_eq!(status.to_string(), "Error: Roadmap with ID 42 not found\n");
    }
}
