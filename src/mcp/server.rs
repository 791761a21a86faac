use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    cli::args::CommonArgs,
    config::load_config,
    core::CheckContext,
    issues::Issue,
};

use super::types::{
    ConfigDto, ConfigValues, GetConfigParams, MissingVariablesTypeItem, Pagination,
    ParseErrorItem, ScanParams, UnresolvedItem, UnresolvedScanResult, VariablesTypeScanResult,
};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

#[derive(Clone)]
pub struct GqlvarsMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for GqlvarsMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl GqlvarsMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Scan for hook calls missing their GraphQL variables type
    #[tool(
        description = "Scan TS/TSX files for useQuery<FooQuery>(...) calls that omit (or mistype) the generated FooQueryVariables type argument. Returns paginated list of issues."
    )]
    pub async fn scan_variables_types(
        &self,
        params: Parameters<ScanParams>,
    ) -> Result<CallToolResult, McpError> {
        let (offset, limit) = page_bounds(&params.0);
        let ctx = open_context(&params.0.project_root_path)?;
        let findings = ctx.findings();

        let mut files: HashSet<&str> = HashSet::new();
        let mut all_items = Vec::new();
        let mut parse_errors = Vec::new();
        for issue in &findings.issues {
            match issue {
                Issue::MissingVariablesType(missing) => {
                    files.insert(missing.context.file_path());
                    all_items.push(MissingVariablesTypeItem::from(missing));
                }
                Issue::ParseError(error) => parse_errors.push(ParseErrorItem::from(error)),
            }
        }

        let total_count = all_items.len();
        let items: Vec<_> = all_items.into_iter().skip(offset).take(limit).collect();
        let has_more = offset + items.len() < total_count;

        json_result(&VariablesTypeScanResult {
            total_count,
            total_file_count: files.len(),
            source_files_checked: ctx.files.len(),
            unresolved_count: findings.warnings.len(),
            items,
            parse_errors,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// List hook calls that were skipped because their types could not be resolved
    #[tool(
        description = "List useQuery calls that could not be checked: result type not imported, imported from a non-relative module, or the generated types file is unreadable. Returns paginated list."
    )]
    pub async fn scan_unresolved(
        &self,
        params: Parameters<ScanParams>,
    ) -> Result<CallToolResult, McpError> {
        let (offset, limit) = page_bounds(&params.0);
        let ctx = open_context(&params.0.project_root_path)?;
        let warnings = &ctx.findings().warnings;

        let total_count = warnings.len();
        let items: Vec<UnresolvedItem> = warnings
            .iter()
            .skip(offset)
            .take(limit)
            .map(UnresolvedItem::from)
            .collect();
        let has_more = offset + items.len() < total_count;

        json_result(&UnresolvedScanResult {
            total_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Get project configuration
    #[tool(description = "Get the gqlvars configuration of a project (.gqlvarsrc.json or defaults).")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }
}

fn page_bounds(params: &ScanParams) -> (usize, usize) {
    let limit = params
        .limit
        .map(|v| v as usize)
        .unwrap_or(DEFAULT_LIMIT)
        .min(MAX_LIMIT);
    let offset = params.offset.map(|v| v as usize).unwrap_or(0);
    (offset, limit)
}

fn open_context(project_root_path: &str) -> Result<CheckContext, McpError> {
    let root = PathBuf::from(project_root_path);
    if !root.is_dir() {
        return Err(McpError::invalid_params(
            format!("Not a directory: {}", project_root_path),
            None,
        ));
    }

    CheckContext::new(&CommonArgs {
        source_root: Some(root),
        verbose: false,
    })
    .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for GqlvarsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "gqlvars MCP helps AI agents keep GraphQL hook calls typed with their generated variables types.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. scan_variables_types - List useQuery<FooQuery>(...) calls missing FooQueryVariables (paginated)\n\
                 3. scan_unresolved - List calls that could not be checked and why (paginated)\n\n\
                 Fix each item by passing the expectedVariablesType as the second type argument,\n\
                 importing it from targetPath when it is not imported yet."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = GqlvarsMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
