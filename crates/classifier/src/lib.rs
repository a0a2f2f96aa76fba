//! Paragraph classifier for court-opinion text.
//!
//! Splits opinion text on blank-line boundaries and tags each paragraph with
//! the legal-doctrine categories whose rule set matches it. Rule tables are
//! data, not logic: a [`RuleTable`] maps category names to ordered
//! case-insensitive pattern lists, so new doctrine categories can be added
//! without touching the classification algorithm.

mod rules;

pub use rules::{default_rule_table, CategoryRule, RuleTable};

/// One retained paragraph of input text plus the categories that matched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedParagraph {
    pub text: String,
    /// Matched category names in rule-table order. Empty when nothing matched.
    pub categories: Vec<String>,
}

impl RuleTable {
    /// Classify `text` into paragraphs tagged with matched categories.
    ///
    /// Paragraph boundaries are runs of two or more line breaks; blank or
    /// whitespace-only segments produce no output entry. Within a paragraph a
    /// category is included iff any of its patterns matches anywhere (the
    /// first hit short-circuits the rest of that category's list). Output
    /// preserves input order; empty input yields an empty sequence.
    pub fn classify(&self, text: &str) -> Vec<ClassifiedParagraph> {
        split_paragraphs(text)
            .map(|paragraph| ClassifiedParagraph {
                categories: self
                    .rules()
                    .iter()
                    .filter(|rule| rule.matches(paragraph))
                    .map(|rule| rule.name().to_string())
                    .collect(),
                text: paragraph.to_string(),
            })
            .collect()
    }
}

/// Split on runs of 2+ line breaks (tolerating horizontal whitespace between
/// them), dropping whitespace-only segments.
fn split_paragraphs(text: &str) -> impl Iterator<Item = &str> {
    rules::paragraph_break()
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
}
