//! `courtfinder` - CourtListener search and case-viewer export from the
//! command line.
//!
//! The search/get/cite/courts subcommands print JSON to stdout (same payloads
//! as the MCP tools); `view` renders a saved records JSON file into a static
//! HTML case viewer.

use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, Subcommand};
use courtfinder_client::CourtListenerClient;
use courtfinder_viewer::{page, Viewer};
use serde_json::to_string_pretty;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "courtfinder")]
#[command(about = "CourtListener legal-opinion search", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for court opinions
    Search {
        /// Search terms
        query: String,

        /// Court ID or shortcut (scotus, ca9, ...)
        #[arg(long)]
        court: Option<String>,

        /// Only cases filed after this date (YYYY-MM-DD)
        #[arg(long)]
        after: Option<String>,

        /// Only cases filed before this date (YYYY-MM-DD)
        #[arg(long)]
        before: Option<String>,

        /// Maximum number of results
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Use semantic search instead of keyword search
        #[arg(long)]
        semantic: bool,
    },

    /// Fetch a full opinion by ID
    Get {
        /// Opinion ID from a search result
        opinion_id: u64,
    },

    /// Resolve a legal citation (e.g. "410 U.S. 113")
    Cite {
        /// Legal citation
        citation: String,
    },

    /// List courts and search shortcuts
    Courts,

    /// Render a records JSON file into a static HTML case viewer
    View {
        /// Path to a JSON array of opinion records
        input: PathBuf,

        /// Output HTML file
        #[arg(short, long, default_value = "cases.html")]
        output: PathBuf,

        /// Pre-select a record by index
        #[arg(long, default_value_t = 0)]
        select: usize,

        /// Pre-filter the case list
        #[arg(long, default_value = "")]
        query: String,

        /// Page title
        #[arg(long, default_value = "CourtFinder cases")]
        title: String,
    },
}

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    match cli.command {
        Commands::Search {
            query,
            court,
            after,
            before,
            limit,
            semantic,
        } => {
            let client = CourtListenerClient::from_env()?;
            let results = client
                .search_opinions(
                    &query,
                    court.as_deref(),
                    after.as_deref(),
                    before.as_deref(),
                    limit.clamp(1, 50),
                    semantic,
                )
                .await?;
            print_stdout(&to_string_pretty(&results)?)?;
        }

        Commands::Get { opinion_id } => {
            let client = CourtListenerClient::from_env()?;
            let opinion = client.get_opinion(opinion_id).await?;
            print_stdout(&to_string_pretty(&opinion)?)?;
        }

        Commands::Cite { citation } => {
            let client = CourtListenerClient::from_env()?;
            let lookup = client.lookup_citation(&citation).await?;
            print_stdout(&to_string_pretty(&lookup)?)?;
        }

        Commands::Courts => {
            let client = CourtListenerClient::from_env()?;
            let courts = client.list_courts().await?;
            print_stdout(&to_string_pretty(&courts)?)?;
        }

        Commands::View {
            input,
            output,
            select,
            query,
            title,
        } => {
            let json = std::fs::read_to_string(&input)
                .with_context(|| format!("read {}", input.display()))?;
            let mut viewer = Viewer::new();
            let html = match viewer.load_json(&json) {
                Ok(()) => {
                    viewer.select(select);
                    log::info!(
                        "loaded {} records from {}",
                        viewer.records().len(),
                        input.display()
                    );
                    page::render_page(&title, &viewer, &query)
                }
                Err(err) => {
                    log::warn!("failed to load {}: {err}", input.display());
                    page::render_error_page(&title, &err.to_string())
                }
            };
            std::fs::write(&output, html)
                .with_context(|| format!("write {}", output.display()))?;
            print_stdout(&format!("Wrote {}", output.display()))?;
        }
    }

    Ok(())
}
