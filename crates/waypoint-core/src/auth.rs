//! Authentication context passed into every service operation.
//!
//! Identity and session management are delegated to the surrounding
//! application; by the time the service layer runs, authentication has
//! already happened. The front end (CLI flag, MCP transport, future HTTP
//! middleware) constructs an [`AuthContext`] per request and threads it
//! through explicitly — there is no process-wide current-user state.

use serde::{Deserialize, Serialize};

/// The authenticated identity on whose behalf an operation runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthContext {
    /// Stable identifier of the authenticated user; scopes all storage
    /// reads and writes.
    pub user_id: String,
}

impl AuthContext {
    /// Creates a context for the given user identifier.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
