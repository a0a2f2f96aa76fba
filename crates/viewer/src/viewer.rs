//! The viewer controller: working set + selection state in one place.

use courtfinder_classifier::{default_rule_table, RuleTable};
use courtfinder_records::{load_records, CollectionStats, OpinionRecord, Result};

use crate::render;

/// Owns the loaded record set and the current selection. All mutation goes
/// through explicit calls (`load_json`, `select`), matching the event-driven
/// model: one load, then row clicks and filter keystrokes.
pub struct Viewer {
    rules: RuleTable,
    records: Vec<OpinionRecord>,
    selected: Option<usize>,
    stats: CollectionStats,
}

impl Viewer {
    pub fn new() -> Self {
        Self::with_rules(default_rule_table().clone())
    }

    pub fn with_rules(rules: RuleTable) -> Self {
        Self {
            rules,
            records: Vec::new(),
            selected: None,
            stats: CollectionStats::compute(&[]),
        }
    }

    /// Replace the working set from a JSON array. On failure the working set
    /// is left empty and the selection cleared; the caller surfaces the error
    /// via [`render::render_load_error`]. Stats recompute on every successful
    /// load (never on filter).
    pub fn load_json(&mut self, json: &str) -> Result<()> {
        self.records.clear();
        self.selected = None;
        self.stats = CollectionStats::compute(&[]);
        let records = load_records(json)?;
        self.records = records;
        self.stats = CollectionStats::compute(&self.records);
        Ok(())
    }

    pub fn records(&self) -> &[OpinionRecord] {
        &self.records
    }

    pub fn stats(&self) -> &CollectionStats {
        &self.stats
    }

    /// Select record `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.records.len() {
            self.selected = Some(index);
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&OpinionRecord> {
        self.selected.and_then(|i| self.records.get(i))
    }

    /// Indices of records matching `query`: case-insensitive substring match
    /// against case name, court, text, or syllabus. Empty query returns every
    /// index in load order. Never mutates the working set or the selection.
    pub fn filter(&self, query: &str) -> Vec<usize> {
        if query.trim().is_empty() {
            return (0..self.records.len()).collect();
        }
        // Only emptiness is special-cased; edge whitespace in a non-empty
        // query is part of the substring being searched for.
        let needle = query.to_lowercase();
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record_matches(record, &needle))
            .map(|(i, _)| i)
            .collect()
    }

    /// Render the list pane for the records matching `query`.
    pub fn render_list(&self, query: &str) -> String {
        render::render_list(&self.records, &self.filter(query), self.selected)
    }

    /// Render the detail pane for the current selection, empty when nothing
    /// is selected yet.
    pub fn render_detail(&self) -> String {
        self.selected_record()
            .map(|record| render::render_detail(record, &self.rules))
            .unwrap_or_default()
    }

    pub fn render_stats(&self) -> String {
        render::render_stats(&self.stats)
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

fn record_matches(record: &OpinionRecord, needle: &str) -> bool {
    let fields = [
        record.display_name(),
        record.display_court(),
        record.text.as_deref().unwrap_or(""),
        record.syllabus.as_deref().unwrap_or(""),
    ];
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"[
        {"caseName": "Roe v. Wade", "court": "Supreme Court",
         "text": "The plaintiffs lack standing.", "wordCount": 100},
        {"caseName": "Smith v. Jones", "court": "Ninth Circuit",
         "syllabus": "Certification under Rule 23."},
        {"caseName": "Doe v. Roe", "court": "Supreme Court"}
    ]"#;

    fn loaded() -> Viewer {
        let mut viewer = Viewer::new();
        viewer.load_json(SAMPLE).unwrap();
        viewer
    }

    #[test]
    fn failed_load_leaves_working_set_empty() {
        let mut viewer = loaded();
        assert_eq!(viewer.records().len(), 3);
        assert!(viewer.load_json("[{").is_err());
        assert!(viewer.records().is_empty());
        assert_eq!(viewer.selected(), None);
    }

    #[test]
    fn failed_load_resets_stats_to_empty() {
        let mut viewer = loaded();
        assert_eq!(viewer.stats().total_cases, 3);
        assert!(viewer.load_json("[{").is_err());
        assert_eq!(viewer.stats(), &CollectionStats::compute(&[]));
        assert_eq!(viewer.stats().total_cases, 0);
        assert_eq!(viewer.render_stats(), render::render_stats(&CollectionStats::compute(&[])));
    }

    #[test]
    fn empty_query_is_the_identity_filter() {
        let viewer = loaded();
        assert_eq!(viewer.filter(""), vec![0, 1, 2]);
        assert_eq!(viewer.filter("   "), vec![0, 1, 2]);
    }

    #[test]
    fn filter_is_idempotent() {
        let viewer = loaded();
        assert_eq!(viewer.filter("supreme"), viewer.filter("supreme"));
    }

    #[test]
    fn filter_matches_name_court_text_and_syllabus() {
        let viewer = loaded();
        assert_eq!(viewer.filter("smith"), vec![1]);
        assert_eq!(viewer.filter("supreme"), vec![0, 2]);
        assert_eq!(viewer.filter("standing"), vec![0]);
        assert_eq!(viewer.filter("rule 23"), vec![1]);
        assert!(viewer.filter("no such case").is_empty());
    }

    #[test]
    fn edge_whitespace_in_a_query_is_matched_literally() {
        let viewer = loaded();
        // "roe " (trailing space) occurs mid-name in "Roe v. Wade" but not in
        // "Doe v. Roe", where the name ends at "Roe".
        assert_eq!(viewer.filter("roe "), vec![0]);
        assert_eq!(viewer.filter("roe"), vec![0, 2]);
        assert_eq!(viewer.filter(" v. "), vec![0, 1, 2]);
    }

    #[test]
    fn filter_is_literal_substring_not_shortcut_expanded() {
        // "scotus" must not match court "Supreme Court".
        let viewer = loaded();
        assert!(viewer.filter("scotus").is_empty());
    }

    #[test]
    fn filtering_never_changes_the_selection() {
        let mut viewer = loaded();
        viewer.select(0);
        let _ = viewer.filter("smith");
        assert_eq!(viewer.selected(), Some(0));
        // The selected row is hidden, but the detail pane still renders it.
        let detail = viewer.render_detail();
        assert!(detail.contains("Roe v. Wade"));
        let list = viewer.render_list("smith");
        assert!(!list.contains("active"));
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut viewer = loaded();
        viewer.select(99);
        assert_eq!(viewer.selected(), None);
    }

    #[test]
    fn stats_come_from_the_full_set_not_the_filtered_view() {
        let viewer = loaded();
        let stats = viewer.stats().clone();
        let _ = viewer.filter("smith");
        assert_eq!(viewer.stats(), &stats);
        assert_eq!(stats.total_cases, 3);
        assert_eq!(stats.total_words, 100);
        assert_eq!(stats.distinct_courts, 2);
    }
}
