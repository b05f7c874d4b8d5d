//! MCP server implementation for Waypoint
//!
//! This module implements the Model Context Protocol server for Waypoint,
//! providing a standardized interface for AI models to generate and manage
//! learning roadmaps.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};
use waypoint_core::{AuthContext, RoadmapService};

pub mod errors;
pub mod handlers;
pub mod prompts;

// Re-export parameter types and result type from handlers for external use
pub use handlers::{DeleteRoadmap, GenerateRoadmap, Id, ListRoadmaps, McpResult, UpdateRoadmap};

/// MCP server for Waypoint
#[derive(Clone)]
pub struct WaypointMcpServer {
    service: Arc<RoadmapService>,
    auth: AuthContext,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WaypointMcpServer {
    /// Create a new Waypoint MCP server
    ///
    /// The server speaks on behalf of one authenticated user; the identity
    /// is fixed at startup and attached to every operation.
    pub fn new(service: RoadmapService, auth: AuthContext) -> Self {
        Self {
            service: Arc::new(service),
            auth,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.service.clone(), self.auth.clone())
    }

    #[tool(
        name = "generate_roadmap",
        description = "Turn a raw AI model response into a stored learning roadmap. Pass the complete response text as raw_response - it may be bare JSON, JSON inside a markdown code fence, or JSON surrounded by prose. The response is repaired, normalized into steps with stable IDs and sequencing links, and persisted. Fails if no JSON document can be extracted or the roadmap has zero steps."
    )]
    async fn generate_roadmap(&self, params: Parameters<GenerateRoadmap>) -> McpResult {
        self.handlers().generate_roadmap(params).await
    }

    #[tool(
        name = "list_roadmaps",
        description = "List your stored roadmaps, newest first. Optionally filter by exact category or difficulty. Returns a formatted list with IDs, titles, difficulty/category tags, and step counts."
    )]
    async fn list_roadmaps(&self, params: Parameters<ListRoadmaps>) -> McpResult {
        self.handlers().list_roadmaps(params).await
    }

    #[tool(
        name = "show_roadmap",
        description = "Display a complete roadmap including every step with its type (milestone/task/resource), duration, resources, and the sequence links between steps. Use the roadmap ID to retrieve."
    )]
    async fn show_roadmap(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_roadmap(params).await
    }

    #[tool(
        name = "update_roadmap",
        description = "Edit a roadmap's title and/or description. Only the provided fields change; the step structure is untouched. Returns the updated roadmap with a list of changes made."
    )]
    async fn update_roadmap(&self, params: Parameters<UpdateRoadmap>) -> McpResult {
        self.handlers().update_roadmap(params).await
    }

    #[tool(
        name = "duplicate_roadmap",
        description = "Create a copy of an existing roadmap under a \"(copy)\" title. The copy gets a new ID and fresh timestamps while keeping all steps and links. Useful for branching a roadmap before editing it."
    )]
    async fn duplicate_roadmap(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().duplicate_roadmap(params).await
    }

    #[tool(
        name = "delete_roadmap",
        description = "Permanently delete a roadmap. This operation cannot be undone and requires confirmed=true; without it the call fails. Consider duplicate_roadmap first if you might want the content back."
    )]
    async fn delete_roadmap(&self, params: Parameters<DeleteRoadmap>) -> McpResult {
        self.handlers().delete_roadmap(params).await
    }

    /// List all available prompts
    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.handlers().list_prompts(request, context).await
    }

    /// Get a specific prompt by name and apply arguments
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.handlers().get_prompt(request, context).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for WaypointMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "waypoint".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                r#"Waypoint turns AI-generated learning plans into stored, structured roadmaps.

## Core Concepts
- **Roadmaps**: A learning journey for one topic, with title, description, difficulty, category, and an estimated total duration
- **Steps**: Ordered units of learning, each typed as milestone, task, or resource, optionally with a duration and resource links
- **Links**: Sequencing edges between steps; by default each step simply follows the previous one

## Workflow Examples

### Creating a Roadmap
1. Use the `roadmap` prompt (or your own prompting) to produce a roadmap JSON document for a topic
2. Store it with `generate_roadmap` - pass the raw response text, imperfect formatting is tolerated
3. Review the stored structure with `show_roadmap`

### Managing Roadmaps
1. Use `list_roadmaps` to see everything you have stored, filtering by category or difficulty
2. Rename or re-describe with `update_roadmap`
3. Branch an existing roadmap with `duplicate_roadmap` before making big edits
4. Remove dead ends with `delete_roadmap` (requires confirmed=true)

## Input Tolerance
`generate_roadmap` accepts messy model output: markdown code fences, prose around the JSON, and missing fields are all handled. Steps may be plain strings or full objects. Only responses with no extractable JSON document, or with zero steps, are rejected.

## Tool Categories
- **Generation**: generate_roadmap
- **Inspection**: list_roadmaps, show_roadmap
- **Management**: update_roadmap, duplicate_roadmap, delete_roadmap"#
                    .to_string(),
            ),
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.list_prompts(request, context).await
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.get_prompt(request, context).await
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: WaypointMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Waypoint MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
