//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageContent,
        PromptMessageRole,
    },
    service::RequestContext,
    ErrorData, RoleServer,
};
use schemars::JsonSchema;
use serde::Deserialize;
use waypoint_core::{
    display::{DeleteResult, OperationStatus},
    params as core_params, AuthContext, RoadmapService,
};

use super::{errors::to_mcp_error, prompts::get_prompt_templates};

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// This generic wrapper implements the MCP side of the parameter wrapper
// pattern: it wraps any core parameter type in a transparent serde container
// and adds the Deserialize/JsonSchema impls the protocol needs, keeping the
// core types free of framework dependencies.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core_params::Id>;
pub type GenerateRoadmap = McpParams<core_params::GenerateRoadmap>;
pub type ListRoadmaps = McpParams<core_params::ListRoadmaps>;
pub type UpdateRoadmap = McpParams<core_params::UpdateRoadmap>;
pub type DeleteRoadmap = McpParams<core_params::DeleteRoadmap>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    service: Arc<RoadmapService>,
    auth: AuthContext,
}

impl McpHandlers {
    pub fn new(service: Arc<RoadmapService>, auth: AuthContext) -> Self {
        Self { service, auth }
    }

    pub async fn generate_roadmap(
        &self,
        Parameters(params): Parameters<GenerateRoadmap>,
    ) -> McpResult {
        debug!("generate_roadmap: {} bytes", params.as_ref().raw_response.len());

        let result = self
            .service
            .generate_roadmap_result(&self.auth, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to generate roadmap", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn list_roadmaps(&self, Parameters(params): Parameters<ListRoadmaps>) -> McpResult {
        debug!("list_roadmaps: {:?}", params);

        let summaries = self
            .service
            .list_roadmaps_summary(&self.auth, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list roadmaps", &e))?;

        let result = if summaries.is_empty() {
            summaries.to_string()
        } else {
            format!("# Roadmaps\n\n{summaries}")
        };
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub async fn show_roadmap(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_roadmap: {:?}", params);

        let inner_params = params.as_ref();
        let roadmap = self
            .service
            .show_roadmap(&self.auth, inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to get roadmap", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(
                    format!("Roadmap with ID {} not found", inner_params.id),
                    None,
                )
            })?;

        Ok(CallToolResult::success(vec![Content::text(
            roadmap.to_string(),
        )]))
    }

    pub async fn update_roadmap(&self, Parameters(params): Parameters<UpdateRoadmap>) -> McpResult {
        debug!("update_roadmap: {:?}", params);

        let result = self
            .service
            .update_roadmap_result(&self.auth, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update roadmap", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn duplicate_roadmap(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("duplicate_roadmap: {:?}", params);

        let result = self
            .service
            .duplicate_roadmap_result(&self.auth, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to duplicate roadmap", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn delete_roadmap(&self, Parameters(params): Parameters<DeleteRoadmap>) -> McpResult {
        debug!("delete_roadmap: {:?}", params);

        let inner_params = params.as_ref();
        let deleted = self
            .service
            .delete_roadmap(&self.auth, inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to delete roadmap", &e))?;

        let text = match deleted {
            Some(roadmap) => DeleteResult::new(roadmap).to_string(),
            None => OperationStatus::failure(format!(
                "Roadmap with ID {} not found",
                inner_params.id
            ))
            .to_string(),
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// List all available prompts
    pub async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, ErrorData> {
        debug!("list_prompts");

        let templates = get_prompt_templates();
        let prompts = templates
            .iter()
            .map(|template| {
                Prompt::new(
                    &template.name,
                    Some(&template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.clone(),
                                description: Some(arg.description.clone()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        Ok(ListPromptsResult {
            next_cursor: None,
            prompts,
        })
    }

    /// Get a specific prompt by name and apply arguments
    pub async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, ErrorData> {
        debug!("get_prompt: {}", request.name);

        let templates = get_prompt_templates();
        let template = templates
            .iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| ErrorData::invalid_params("Prompt not found", None))?;

        let mut prompt_text = template.template.clone();

        // Apply argument substitution if arguments are provided
        if let Some(args) = &request.arguments {
            for arg_def in &template.arguments {
                if let Some(arg_value) = args.get(&arg_def.name) {
                    if let Some(arg_str) = arg_value.as_str() {
                        let placeholder = format!("{{{}}}", arg_def.name);
                        prompt_text = prompt_text.replace(&placeholder, arg_str);
                    } else if arg_def.required {
                        return Err(ErrorData::invalid_params(
                            format!("Argument '{}' must be a string", arg_def.name),
                            None,
                        ));
                    }
                } else if arg_def.required {
                    return Err(ErrorData::invalid_params(
                        format!("Required argument '{}' is missing", arg_def.name),
                        None,
                    ));
                }
            }
        } else {
            let required_args: Vec<_> = template
                .arguments
                .iter()
                .filter(|arg| arg.required)
                .map(|arg| arg.name.as_str())
                .collect();
            if !required_args.is_empty() {
                return Err(ErrorData::invalid_params(
                    format!("Required arguments missing: {}", required_args.join(", ")),
                    None,
                ));
            }
        }

        Ok(GetPromptResult {
            description: Some(template.description.clone()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(prompt_text),
            }],
        })
    }
}
