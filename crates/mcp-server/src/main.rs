//! CourtFinder MCP Server
//!
//! Exposes CourtListener legal-opinion search to AI agents via the MCP
//! protocol.
//!
//! ## Tools
//!
//! - `search_opinions` - Find cases by keyword, doctrine, or party name
//! - `get_opinion` - Fetch a full opinion (text, syllabus, metadata) by ID
//! - `lookup_citation` - Resolve a legal citation like "410 U.S. 113"
//! - `list_courts` - List court IDs and shortcuts for search filtering
//! - `get_opinion_pdf` - Resolve (and optionally download) an opinion's PDF
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "courtfinder": {
//!       "command": "courtfinder-mcp",
//!       "env": { "COURTLISTENER_API_TOKEN": "..." }
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod tools;

use tools::CourtFinderService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting CourtFinder MCP server");

    let service = CourtFinderService::new();
    let server = service.serve(stdio()).await?;

    server.waiting().await?;

    log::info!("CourtFinder MCP server stopped");
    Ok(())
}
