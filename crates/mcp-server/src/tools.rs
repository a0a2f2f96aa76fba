//! MCP tools for CourtFinder.
//!
//! Each tool is thin glue over [`CourtListenerClient`]: validate and default
//! the arguments, make the call, serialize the result as pretty JSON text.
//! Failures stay tool-scoped - they come back as error content, never as a
//! transport failure.

use courtfinder_client::CourtListenerClient;
use once_cell::sync::OnceCell;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const DEFAULT_SEARCH_LIMIT: usize = 20;
const MAX_SEARCH_LIMIT: usize = 50;

/// CourtFinder MCP service.
#[derive(Clone)]
pub struct CourtFinderService {
    /// Lazily built so a missing token surfaces per-call, not at startup.
    client: Arc<OnceCell<CourtListenerClient>>,
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl CourtFinderService {
    pub fn new() -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            tool_router: Self::tool_router(),
        }
    }

    fn client(&self) -> courtfinder_client::Result<&CourtListenerClient> {
        self.client.get_or_try_init(CourtListenerClient::from_env)
    }
}

#[tool_handler]
impl ServerHandler for CourtFinderService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "CourtFinder searches CourtListener for court opinions. Use 'search_opinions' to find cases by keyword or doctrine, 'get_opinion' to fetch full opinion text by ID, 'lookup_citation' to resolve citations like '410 U.S. 113', 'list_courts' for court IDs, and 'get_opinion_pdf' for original PDFs.".into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Tool Input Schemas
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchOpinionsRequest {
    /// Search terms
    #[schemars(description = "Search terms (e.g., 'qualified immunity', 'class certification predominance')")]
    pub query: String,

    /// Court ID or shortcut
    #[schemars(description = "Court ID or shortcut. Examples: 'scotus' (Supreme Court), 'ca9' (9th Circuit), 'cadc' (DC Circuit)")]
    pub court: Option<String>,

    /// Filed-after filter
    #[schemars(description = "Only cases filed after this date (YYYY-MM-DD)")]
    pub date_after: Option<String>,

    /// Filed-before filter
    #[schemars(description = "Only cases filed before this date (YYYY-MM-DD)")]
    pub date_before: Option<String>,

    /// Maximum results
    #[schemars(description = "Maximum number of results (default: 20, max: 50)")]
    pub limit: Option<usize>,

    /// Semantic search toggle
    #[schemars(description = "Use semantic search instead of keyword search. Accepts plain-language queries like 'cases about whether police can search phones without a warrant'. Default is false.")]
    pub semantic: Option<bool>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetOpinionRequest {
    /// Opinion ID from a search result
    #[schemars(description = "The opinion ID from a search result")]
    pub opinion_id: u64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupCitationRequest {
    /// Legal citation
    #[schemars(description = "Legal citation (e.g., '410 U.S. 113', '347 U.S. 483')")]
    pub citation: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetOpinionPdfRequest {
    /// Opinion ID from a search result
    #[schemars(description = "The opinion ID from a search result")]
    pub opinion_id: u64,

    /// Optional download path
    #[schemars(description = "Optional file path to save the PDF (e.g., '/tmp/opinion.pdf')")]
    pub save_path: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl CourtFinderService {
    /// Search for court opinions
    #[tool(description = "Search CourtListener for court opinions. Use this to find cases by keyword, topic, legal doctrine, or party names. Supports filtering by court and date range.")]
    pub async fn search_opinions(
        &self,
        Parameters(request): Parameters<SearchOpinionsRequest>,
    ) -> Result<CallToolResult, McpError> {
        if request.query.trim().is_empty() {
            return Ok(CallToolResult::error(vec![Content::text(
                "Error: Query cannot be empty",
            )]));
        }
        let limit = clamp_limit(request.limit);

        let client = match self.client() {
            Ok(c) => c,
            Err(e) => return Ok(error_result(&e)),
        };
        let results = client
            .search_opinions(
                &request.query,
                request.court.as_deref(),
                request.date_after.as_deref(),
                request.date_before.as_deref(),
                limit,
                request.semantic.unwrap_or(false),
            )
            .await;
        match results {
            Ok(r) => Ok(json_result(&r)),
            Err(e) => Ok(error_result(&e)),
        }
    }

    /// Fetch a full opinion by ID
    #[tool(description = "Fetch the full text of a court opinion by its ID. Use this after searching to retrieve the complete opinion text, syllabus, and metadata.")]
    pub async fn get_opinion(
        &self,
        Parameters(request): Parameters<GetOpinionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let client = match self.client() {
            Ok(c) => c,
            Err(e) => return Ok(error_result(&e)),
        };
        match client.get_opinion(request.opinion_id).await {
            Ok(opinion) => Ok(json_result(&opinion)),
            Err(e) => Ok(error_result(&e)),
        }
    }

    /// Resolve a legal citation
    #[tool(description = "Resolve a legal citation to find the corresponding case. Use standard legal citation formats like '410 U.S. 113' or '347 U.S. 483'.")]
    pub async fn lookup_citation(
        &self,
        Parameters(request): Parameters<LookupCitationRequest>,
    ) -> Result<CallToolResult, McpError> {
        let client = match self.client() {
            Ok(c) => c,
            Err(e) => return Ok(error_result(&e)),
        };
        match client.lookup_citation(&request.citation).await {
            Ok(lookup) => Ok(json_result(&lookup)),
            Err(e) => Ok(error_result(&e)),
        }
    }

    /// List available courts
    #[tool(description = "List all available courts in CourtListener. Returns court IDs that can be used to filter searches, plus shortcuts like 'scotus' for Supreme Court or 'ca9' for 9th Circuit.")]
    pub async fn list_courts(&self) -> Result<CallToolResult, McpError> {
        let client = match self.client() {
            Ok(c) => c,
            Err(e) => return Ok(error_result(&e)),
        };
        match client.list_courts().await {
            Ok(courts) => Ok(json_result(&courts)),
            Err(e) => Ok(error_result(&e)),
        }
    }

    /// Resolve an opinion's PDF
    #[tool(description = "Get the PDF URL for a court opinion, and optionally download it. Not all opinions have PDFs available. Returns the direct PDF URL which can be used to download the original court document.")]
    pub async fn get_opinion_pdf(
        &self,
        Parameters(request): Parameters<GetOpinionPdfRequest>,
    ) -> Result<CallToolResult, McpError> {
        let client = match self.client() {
            Ok(c) => c,
            Err(e) => return Ok(error_result(&e)),
        };
        match client
            .get_opinion_pdf(request.opinion_id, request.save_path.as_deref())
            .await
        {
            Ok(info) => Ok(json_result(&info)),
            Err(e) => Ok(error_result(&e)),
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn clamp_limit(limit: Option<usize>) -> usize {
    limit.unwrap_or(DEFAULT_SEARCH_LIMIT).clamp(1, MAX_SEARCH_LIMIT)
}

fn json_result<T: Serialize>(value: &T) -> CallToolResult {
    CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).unwrap_or_default(),
    )])
}

fn error_result(error: &dyn std::fmt::Display) -> CallToolResult {
    log::error!("Tool error: {error}");
    CallToolResult::error(vec![Content::text(format!("Error: {error}"))])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_and_clamps() {
        assert_eq!(clamp_limit(None), 20);
        assert_eq!(clamp_limit(Some(5)), 5);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(500)), 50);
    }
}
