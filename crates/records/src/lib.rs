//! Shared opinion-record data model for CourtFinder.
//!
//! An [`OpinionRecord`] is one fetched court opinion. Records arrive as a JSON
//! array from the fetch side (full opinion fetches emit snake_case keys,
//! search-hit stubs carry a nested `searchMetadata` object), so every field is
//! optional and display values are resolved through an explicit fallback
//! chain. Records are immutable once loaded; a working set keeps load order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecordsError>;

#[derive(Error, Debug)]
pub enum RecordsError {
    #[error("Invalid records payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// Stub metadata attached to search hits that were never fully fetched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchMetadata {
    pub name: Option<String>,
    pub date: Option<String>,
    pub court: Option<String>,
}

/// One fetched court opinion, or a failed fetch (`error` set).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpinionRecord {
    #[serde(default, alias = "case_name")]
    pub case_name: Option<String>,
    #[serde(default, alias = "date_filed")]
    pub date_filed: Option<String>,
    #[serde(default)]
    pub court: Option<String>,
    #[serde(default)]
    pub citation: Option<String>,
    #[serde(default)]
    pub judges: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub syllabus: Option<String>,
    #[serde(default, alias = "word_count")]
    pub word_count: Option<u64>,
    #[serde(default, alias = "pdf_url")]
    pub pdf_url: Option<String>,
    #[serde(default, alias = "pdf_page_count")]
    pub pdf_page_count: Option<u64>,
    #[serde(default, alias = "source_url", alias = "url")]
    pub source_url: Option<String>,
    #[serde(default, alias = "scholar_url")]
    pub scholar_url: Option<String>,
    /// Non-empty when the fetch for this record failed.
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, alias = "search_metadata")]
    pub search_metadata: Option<SearchMetadata>,
}

impl OpinionRecord {
    /// Case name, falling back to the search-hit stub, else empty.
    pub fn display_name(&self) -> &str {
        non_empty(self.case_name.as_deref())
            .or_else(|| self.meta_field(|m| m.name.as_deref()))
            .unwrap_or("")
    }

    /// Filing date, falling back to the search-hit stub, else empty.
    pub fn display_date(&self) -> &str {
        non_empty(self.date_filed.as_deref())
            .or_else(|| self.meta_field(|m| m.date.as_deref()))
            .unwrap_or("")
    }

    /// Court, falling back to the search-hit stub, else empty.
    pub fn display_court(&self) -> &str {
        non_empty(self.court.as_deref())
            .or_else(|| self.meta_field(|m| m.court.as_deref()))
            .unwrap_or("")
    }

    /// Judges line. Search-hit stubs never carry judges, so unlike
    /// name/date/court this has no metadata fallback.
    pub fn display_judges(&self) -> &str {
        non_empty(self.judges.as_deref()).unwrap_or("")
    }

    pub fn has_error(&self) -> bool {
        non_empty(self.error.as_deref()).is_some()
    }

    pub fn has_text(&self) -> bool {
        non_empty(self.text.as_deref()).is_some()
    }

    fn meta_field(&self, pick: impl Fn(&SearchMetadata) -> Option<&str>) -> Option<&str> {
        self.search_metadata
            .as_ref()
            .and_then(|m| non_empty(pick(m)))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Parse a JSON array of opinion records. Load order is preserved; a malformed
/// payload fails as a whole (no partial working set).
pub fn load_records(json: &str) -> Result<Vec<OpinionRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Aggregate statistics over a full working set. Recomputed on load, not on
/// filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CollectionStats {
    pub total_cases: usize,
    /// Sum of word counts; records without one count as zero.
    pub total_words: u64,
    /// Distinct non-empty court values (fallback-resolved).
    pub distinct_courts: usize,
}

impl CollectionStats {
    pub fn compute(records: &[OpinionRecord]) -> Self {
        let total_words = records.iter().filter_map(|r| r.word_count).sum();
        let mut courts: Vec<&str> = records
            .iter()
            .map(|r| r.display_court())
            .filter(|c| !c.is_empty())
            .collect();
        courts.sort_unstable();
        courts.dedup();
        Self {
            total_cases: records.len(),
            total_words,
            distinct_courts: courts.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stub(name: &str, court: &str) -> OpinionRecord {
        OpinionRecord {
            search_metadata: Some(SearchMetadata {
                name: Some(name.to_string()),
                date: Some("2021-06-01".to_string()),
                court: Some(court.to_string()),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn display_fields_prefer_top_level_over_metadata() {
        let mut record = stub("Stub v. Name", "Stub Court");
        record.case_name = Some("Real v. Name".to_string());
        assert_eq!(record.display_name(), "Real v. Name");
        assert_eq!(record.display_date(), "2021-06-01");
        assert_eq!(record.display_court(), "Stub Court");
    }

    #[test]
    fn blank_top_level_fields_fall_through_to_metadata() {
        let mut record = stub("Stub v. Name", "Stub Court");
        record.case_name = Some("   ".to_string());
        assert_eq!(record.display_name(), "Stub v. Name");
    }

    #[test]
    fn judges_have_no_metadata_fallback() {
        let record = stub("Stub v. Name", "Stub Court");
        assert_eq!(record.display_judges(), "");
    }

    #[test]
    fn loads_camel_case_and_snake_case_fields() {
        let records = load_records(
            r#"[
                {"caseName": "A v. B", "wordCount": 10, "pdfUrl": "https://x/pdf"},
                {"case_name": "C v. D", "word_count": 20, "date_filed": "1973-01-22"}
            ]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].display_name(), "A v. B");
        assert_eq!(records[0].word_count, Some(10));
        assert_eq!(records[1].display_name(), "C v. D");
        assert_eq!(records[1].display_date(), "1973-01-22");
    }

    #[test]
    fn missing_fields_default_to_absent() {
        let records = load_records(r#"[{}]"#).unwrap();
        assert_eq!(records[0].display_name(), "");
        assert!(!records[0].has_error());
        assert!(!records[0].has_text());
    }

    #[test]
    fn malformed_payload_is_an_error_not_a_partial_set() {
        assert!(load_records("{\"not\": \"an array\"}").is_err());
        assert!(load_records("[{").is_err());
    }

    #[test]
    fn stats_treat_missing_word_counts_as_zero() {
        let records = load_records(
            r#"[
                {"caseName": "A", "court": "Supreme Court", "wordCount": 100},
                {"caseName": "B", "court": "Supreme Court"},
                {"caseName": "C", "court": "Ninth Circuit"}
            ]"#,
        )
        .unwrap();
        let stats = CollectionStats::compute(&records);
        assert_eq!(
            stats,
            CollectionStats {
                total_cases: 3,
                total_words: 100,
                distinct_courts: 2,
            }
        );
    }
}
