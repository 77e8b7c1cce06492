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
    config::{Overrides, load_config, resolve_settings},
    core,
};

use super::types::{
    ConfigDto, ConfigValues, ExtractStringsParams, ExtractStringsResult, FailureItem,
    GetConfigParams, PackageItem, Pagination, RewritePackageParams, RewritePackageResult,
    StringItem,
};

#[derive(Clone)]
pub struct I18nizeMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for I18nizeMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl I18nizeMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// List translatable strings, optionally writing the catalogs
    #[tool(
        description = "Extract translatable string literals from Go files. Returns a paginated list of strings with positions. Set write=true to also write the .extracted.json and .<locale>.json catalogs next to each file."
    )]
    pub async fn extract_strings(
        &self,
        params: Parameters<ExtractStringsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params.limit.map(|v| v as usize).unwrap_or(50).min(200);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);
        let write = params.write.unwrap_or(false);

        let mut settings = resolve_settings(
            Path::new(&params.project_root_path),
            Overrides {
                locale: params.locale,
                excluded_strings_file: params.excluded_strings_file.map(PathBuf::from),
                ..Default::default()
            },
        )
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))?;
        settings.options.recursive = params.recursive.unwrap_or(true);
        settings.options.dry_run = !write;

        let report = core::extract(&settings.options, &settings.exclusions)
            .map_err(|e| McpError::internal_error(format!("Extraction failed: {}", e), None))?;

        let all_items: Vec<StringItem> = report
            .files
            .iter()
            .flat_map(|file| {
                file.occurrences.iter().map(|occurrence| StringItem {
                    value: occurrence.value.clone(),
                    file_path: occurrence.filename.clone(),
                    line: occurrence.line,
                    column: occurrence.column,
                })
            })
            .collect();

        let total_count = all_items.len();
        let file_count = report.files.iter().filter(|file| file.strings > 0).count();

        // Apply pagination
        let items: Vec<StringItem> = all_items.into_iter().skip(offset).take(limit).collect();
        let has_more = offset + items.len() < total_count;

        to_tool_result(&ExtractStringsResult {
            written: write,
            total_count,
            file_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
            errors: report.errors.iter().map(FailureItem::from).collect(),
        })
    }

    /// Wrap translatable strings in translation calls
    #[tool(
        description = "Rewrite Go files so translatable string literals become T(\"...\") calls, add the runtime import, and generate one i18n_init.go per package. Test files are never modified. Use dryRun=true to preview counts."
    )]
    pub async fn rewrite_package(
        &self,
        params: Parameters<RewritePackageParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let dry_run = params.dry_run.unwrap_or(false);

        let mut settings = resolve_settings(
            Path::new(&params.project_root_path),
            Overrides {
                wrapper_symbol: params.wrapper_symbol,
                runtime_package: params.runtime_package,
                excluded_strings_file: params.excluded_strings_file.map(PathBuf::from),
                ..Default::default()
            },
        )
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))?;
        settings.options.recursive = params.recursive.unwrap_or(true);
        settings.options.dry_run = dry_run;
        settings.options.output_dir = params.output_dir.map(PathBuf::from);

        let report = core::rewrite(&settings.options, &settings.exclusions)
            .map_err(|e| McpError::internal_error(format!("Rewrite failed: {}", e), None))?;

        to_tool_result(&RewritePackageResult {
            dry_run,
            wrapped_count: report.totals.strings,
            rewritten_file_count: report.totals.rewritten_files,
            init_artifact_count: report.totals.init_artifacts,
            packages: report
                .directories
                .iter()
                .filter(|dir| dir.counters.rewritten_files > 0)
                .map(PackageItem::from)
                .collect(),
            errors: report.errors.iter().map(FailureItem::from).collect(),
        })
    }

    /// Get the current i18nize configuration
    #[tool(description = "Get the current i18nize configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;

        to_tool_result(&ConfigDto {
            from_file: result.from_file(),
            config_path: result
                .path
                .as_ref()
                .map(|path| path.to_string_lossy().to_string()),
            config: ConfigValues::from(result.config),
        })
    }
}

fn to_tool_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for I18nizeMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "i18nize MCP helps AI agents internationalize Go packages.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. extract_strings - List translatable string literals (paginated), optionally writing catalogs\n\
                 3. rewrite_package - Wrap literals in T(...) calls and generate i18n_init.go per package\n\n\
                 Recommended Workflow:\n\
                 1. Use extract_strings to review what would be translated\n\
                 2. Add anything that must stay literal to the excluded strings file\n\
                 3. Run rewrite_package with dryRun=true, then without it\n\
                 4. Run extract_strings with write=true to produce the catalogs the runtime embeds"
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
            let service = I18nizeMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
