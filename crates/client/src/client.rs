//! Async CourtListener client and its response types.

use courtfinder_records::OpinionRecord;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::courts::{court_shortcuts, resolve_court};
use crate::error::{ClientError, Result};
use crate::text::{citation_query, strip_html};

pub const TOKEN_ENV_VAR: &str = "COURTLISTENER_API_TOKEN";

const BASE_URL: &str = "https://www.courtlistener.com/api/rest/v4/";
const SEARCH_URL: &str = "https://www.courtlistener.com/api/rest/v3/search/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One search hit, trimmed to what an agent needs to pick a case.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub case_name: Option<String>,
    pub citation: Option<String>,
    pub date_filed: Option<String>,
    pub court: Option<String>,
    pub cluster_id: Option<u64>,
    pub opinion_id: Option<u64>,
    pub snippet: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub count: u64,
    pub showing: usize,
    pub results: Vec<SearchHit>,
    pub search_type: &'static str,
}

/// A fully fetched opinion: the shared record model plus fetch-side ids.
#[derive(Debug, Clone, Serialize)]
pub struct Opinion {
    #[serde(flatten)]
    pub record: OpinionRecord,
    pub author: Option<String>,
    pub opinion_id: Option<u64>,
    pub cluster_id: Option<u64>,
}

/// One citation-lookup match. Unlike a search hit this keeps the full
/// citation list (parallel citations matter when resolving one) and has no
/// snippet.
#[derive(Debug, Clone, Serialize)]
pub struct CitationMatch {
    pub case_name: Option<String>,
    pub citation: Vec<String>,
    pub date_filed: Option<String>,
    pub court: Option<String>,
    pub cluster_id: Option<u64>,
    pub opinion_id: Option<u64>,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CitationLookup {
    pub found: bool,
    pub query: String,
    pub count: usize,
    pub matches: Vec<CitationMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PdfInfo {
    pub opinion_id: u64,
    pub has_pdf: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size_bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourtInfo {
    pub id: String,
    pub name: String,
    pub short_name: Option<String>,
    pub jurisdiction: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourtList {
    pub count: usize,
    pub courts: Vec<CourtInfo>,
    /// Shortcut → court ID convenience table.
    pub shortcuts: Vec<(String, String)>,
}

// Raw API shapes. Only the fields we read; everything else is ignored.

#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    #[serde(default)]
    count: u64,
    #[serde(default)]
    results: Vec<RawSearchHit>,
}

#[derive(Debug, Deserialize)]
struct RawSearchHit {
    #[serde(rename = "caseName")]
    case_name: Option<String>,
    #[serde(default)]
    citation: Option<Vec<Option<String>>>,
    #[serde(rename = "dateFiled")]
    date_filed: Option<String>,
    court: Option<String>,
    cluster_id: Option<u64>,
    id: Option<u64>,
    #[serde(default)]
    snippet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawOpinion {
    id: Option<u64>,
    cluster: Option<String>,
    case_name: Option<String>,
    author_str: Option<String>,
    plain_text: Option<String>,
    html_with_citations: Option<String>,
    html: Option<String>,
    html_lawbox: Option<String>,
    download_url: Option<String>,
    page_count: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCluster {
    id: Option<u64>,
    case_name: Option<String>,
    citation_string: Option<String>,
    court: Option<String>,
    date_filed: Option<String>,
    judges: Option<String>,
    syllabus: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCourtPage {
    #[serde(default)]
    results: Vec<RawCourt>,
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCourt {
    id: String,
    full_name: String,
    short_name: Option<String>,
    jurisdiction: Option<String>,
}

/// Authenticated async client for the CourtListener API.
#[derive(Clone)]
pub struct CourtListenerClient {
    http: reqwest::Client,
    base_url: String,
    search_url: String,
}

impl CourtListenerClient {
    /// Build a client with an explicit API token.
    pub fn new(token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Token {token}"))
            .map_err(|_| ClientError::InvalidToken)?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: BASE_URL.to_string(),
            search_url: SEARCH_URL.to_string(),
        })
    }

    /// Build a client from `COURTLISTENER_API_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV_VAR).map_err(|_| ClientError::MissingToken)?;
        if token.trim().is_empty() {
            return Err(ClientError::MissingToken);
        }
        Self::new(token.trim())
    }

    /// Point the client at a different API host (tests, mirrors).
    pub fn with_base_urls(mut self, base_url: &str, search_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self.search_url = search_url.to_string();
        self
    }

    /// Keyword or semantic search for opinions.
    pub async fn search_opinions(
        &self,
        query: &str,
        court: Option<&str>,
        date_after: Option<&str>,
        date_before: Option<&str>,
        limit: usize,
        semantic: bool,
    ) -> Result<SearchResults> {
        let mut params: Vec<(&str, String)> = vec![
            ("q", query.to_string()),
            ("type", "o".to_string()),
            ("order_by", "score desc".to_string()),
        ];
        if semantic {
            params.push(("semantic", "true".to_string()));
        }
        if let Some(court) = court {
            params.push(("court", resolve_court(court)));
        }
        if let Some(after) = date_after {
            params.push(("filed_after", after.to_string()));
        }
        if let Some(before) = date_before {
            params.push(("filed_before", before.to_string()));
        }

        log::debug!("searching opinions: {query:?} (semantic={semantic})");
        let raw: RawSearchResponse = self.get_json(&self.search_url, &params).await?;
        let results: Vec<SearchHit> = raw
            .results
            .into_iter()
            .take(limit)
            .map(map_search_hit)
            .collect();
        Ok(SearchResults {
            count: raw.count,
            showing: results.len(),
            results,
            search_type: if semantic { "semantic" } else { "keyword" },
        })
    }

    /// Fetch a full opinion (text plus cluster metadata) by ID.
    pub async fn get_opinion(&self, opinion_id: u64) -> Result<Opinion> {
        let url = format!("{}opinions/{opinion_id}/", self.base_url);
        let raw: RawOpinion = self.get_json(&url, &[]).await?;

        // Cluster carries the case-level metadata; the opinion row points at
        // it with a URL.
        let cluster = match raw.cluster.as_deref().and_then(trailing_id) {
            Some(cluster_id) => {
                let url = format!("{}clusters/{cluster_id}/", self.base_url);
                self.get_json::<RawCluster>(&url, &[]).await?
            }
            None => RawCluster::default(),
        };

        Ok(build_opinion(raw, cluster))
    }

    /// Resolve a legal citation to matching cases (top 5).
    pub async fn lookup_citation(&self, citation: &str) -> Result<CitationLookup> {
        let params: Vec<(&str, String)> = vec![
            ("q", citation_query(citation)),
            ("type", "o".to_string()),
            ("order_by", "score desc".to_string()),
        ];
        let raw: RawSearchResponse = self.get_json(&self.search_url, &params).await?;
        let matches: Vec<CitationMatch> = raw
            .results
            .into_iter()
            .take(5)
            .map(map_citation_match)
            .collect();
        if matches.is_empty() {
            return Ok(CitationLookup {
                found: false,
                query: citation.to_string(),
                count: 0,
                matches,
                message: Some("No matching cases found".to_string()),
            });
        }
        Ok(CitationLookup {
            found: true,
            query: citation.to_string(),
            count: matches.len(),
            matches,
            message: None,
        })
    }

    /// PDF availability for an opinion, optionally downloading it.
    pub async fn get_opinion_pdf(
        &self,
        opinion_id: u64,
        save_path: Option<&str>,
    ) -> Result<PdfInfo> {
        let url = format!("{}opinions/{opinion_id}/", self.base_url);
        let raw: RawOpinion = self.get_json(&url, &[]).await?;

        let Some(pdf_url) = raw.download_url.filter(|u| !u.is_empty()) else {
            return Ok(PdfInfo {
                opinion_id,
                has_pdf: false,
                pdf_url: None,
                page_count: None,
                saved_to: None,
                file_size_bytes: None,
                message: Some("No PDF available for this opinion".to_string()),
            });
        };

        let mut info = PdfInfo {
            opinion_id,
            has_pdf: true,
            pdf_url: Some(pdf_url.clone()),
            page_count: raw.page_count,
            saved_to: None,
            file_size_bytes: None,
            message: None,
        };

        if let Some(path) = save_path {
            let response = self.http.get(&pdf_url).send().await?;
            let response = check_status(response)?;
            let bytes = response.bytes().await?;
            std::fs::write(path, &bytes)?;
            log::info!("saved PDF for opinion {opinion_id} to {path}");
            info.saved_to = Some(path.to_string());
            info.file_size_bytes = Some(bytes.len());
        }

        Ok(info)
    }

    /// List every court, following pagination, plus the shortcut table.
    pub async fn list_courts(&self) -> Result<CourtList> {
        let mut courts = Vec::new();
        let mut url = Some(format!("{}courts/", self.base_url));

        while let Some(page_url) = url {
            let page: RawCourtPage = self.get_json(&page_url, &[]).await?;
            courts.extend(page.results.into_iter().map(|c| CourtInfo {
                id: c.id,
                name: c.full_name,
                short_name: c.short_name,
                jurisdiction: c.jurisdiction,
            }));
            url = page.next;
        }

        Ok(CourtList {
            count: courts.len(),
            courts,
            shortcuts: court_shortcuts()
                .iter()
                .map(|(s, id)| (s.to_string(), id.to_string()))
                .collect(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let mut request = self.http.get(url);
        if !params.is_empty() {
            request = request.query(params);
        }
        let response = check_status(request.send().await?)?;
        Ok(response.json().await?)
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }
    Ok(response)
}

fn map_search_hit(raw: RawSearchHit) -> SearchHit {
    let url = raw
        .cluster_id
        .map(|id| format!("https://www.courtlistener.com/opinion/{id}/"))
        .unwrap_or_default();
    SearchHit {
        case_name: raw.case_name,
        citation: raw.citation.and_then(|c| c.into_iter().flatten().next()),
        date_filed: raw.date_filed,
        court: raw.court,
        cluster_id: raw.cluster_id,
        opinion_id: raw.id,
        snippet: strip_html(raw.snippet.as_deref().unwrap_or("")),
        url,
    }
}

fn map_citation_match(raw: RawSearchHit) -> CitationMatch {
    let url = raw
        .cluster_id
        .map(|id| format!("https://www.courtlistener.com/opinion/{id}/"))
        .unwrap_or_default();
    CitationMatch {
        case_name: raw.case_name,
        citation: raw
            .citation
            .map(|c| c.into_iter().flatten().collect())
            .unwrap_or_default(),
        date_filed: raw.date_filed,
        court: raw.court,
        cluster_id: raw.cluster_id,
        opinion_id: raw.id,
        url,
    }
}

fn build_opinion(raw: RawOpinion, cluster: RawCluster) -> Opinion {
    // Prefer plain text; fall back through the HTML variants, stripped.
    let text = raw
        .plain_text
        .clone()
        .filter(|t| !t.is_empty())
        .or_else(|| nonempty(&raw.html_with_citations).map(|t| strip_html(t)))
        .or_else(|| nonempty(&raw.html).map(|t| strip_html(t)))
        .or_else(|| nonempty(&raw.html_lawbox).map(|t| strip_html(t)))
        .unwrap_or_default();
    let word_count = if text.is_empty() {
        0
    } else {
        text.split_whitespace().count() as u64
    };

    let case_name = cluster
        .case_name
        .filter(|n| !n.is_empty())
        .or(raw.case_name)
        .or_else(|| Some("Unknown".to_string()));
    let source_url = cluster
        .id
        .map(|id| format!("https://www.courtlistener.com/opinion/{id}/"));

    Opinion {
        record: OpinionRecord {
            case_name,
            citation: cluster.citation_string,
            court: cluster.court,
            date_filed: cluster.date_filed,
            judges: cluster.judges,
            syllabus: Some(strip_html(cluster.syllabus.as_deref().unwrap_or(""))),
            text: Some(text),
            word_count: Some(word_count),
            pdf_url: raw.download_url.clone().filter(|u| !u.is_empty()),
            pdf_page_count: raw.page_count,
            source_url,
            ..Default::default()
        },
        author: raw.author_str,
        opinion_id: raw.id,
        cluster_id: cluster.id,
    }
}

fn nonempty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|t| !t.is_empty())
}

/// Extract the trailing numeric segment of a resource URL like
/// `.../clusters/12345/`.
fn trailing_id(url: &str) -> Option<u64> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|id| id.parse().ok())
}
