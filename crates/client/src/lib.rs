//! CourtListener REST API client.
//!
//! Thin glue over the CourtListener v3 search and v4 REST endpoints: opinion
//! search, full-opinion fetch, citation lookup, PDF resolution, and the court
//! catalogue. Authentication is a forwarded API token, nothing more.

mod client;
mod courts;
mod error;
mod text;

pub use client::{
    CitationLookup, CitationMatch, CourtInfo, CourtList, CourtListenerClient, Opinion, PdfInfo,
    SearchHit, SearchResults, TOKEN_ENV_VAR,
};
pub use courts::{court_shortcuts, resolve_court};
pub use error::{ClientError, Result};
pub use text::strip_html;
