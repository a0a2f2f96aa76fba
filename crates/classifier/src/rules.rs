//! Category rule tables: legal-doctrine vocabulary as swappable data.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// A named category with an ordered, case-insensitive pattern list.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    name: String,
    patterns: Vec<Regex>,
}

impl CategoryRule {
    pub fn new(name: &str, patterns: &[&str]) -> Result<Self, regex::Error> {
        let patterns = patterns
            .iter()
            .map(|p| RegexBuilder::new(p).case_insensitive(true).build())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: name.to_string(),
            patterns,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True iff any pattern matches anywhere in `paragraph`. Patterns are
    /// tried in order only to short-circuit; the outcome is match/no-match.
    pub fn matches(&self, paragraph: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(paragraph))
    }
}

/// Ordered set of category rules. Category order here fixes the order of
/// matched categories in classifier output.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<CategoryRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }
}

/// The built-in class-action doctrine table. Category names are part of the
/// styling contract (`highlight-injury` etc.), so renaming one is a breaking
/// change for downstream stylesheets.
static DEFAULT_TABLE: Lazy<RuleTable> = Lazy::new(|| {
    let rule = |name, patterns: &[&str]| {
        // Patterns below are fixed literals; a build failure here is a
        // programming error, not an input error.
        CategoryRule::new(name, patterns).expect("built-in rule table must compile")
    };
    RuleTable::new(vec![
        rule(
            "injury",
            &[
                r"injur(?:y|ies)[-\s]+in[-\s]+fact",
                r"article\s+iii\s+standing",
                r"concrete\s+and\s+particularized",
                r"\bstanding\b",
            ],
        ),
        rule(
            "rule23",
            &[
                r"\brule\s*23\b",
                r"fed\.?\s*r\.?\s*civ\.?\s*p\.?\s*23",
                r"class\s+certification",
                r"certif\w+\s+(?:the\s+|a\s+)?class",
                r"class\s+action",
            ],
        ),
        rule(
            "predominance",
            &[
                r"predomin\w+",
                r"commonality",
                r"typicality",
                r"numerosity",
                r"\badequacy\b",
                r"adequate\s+representat\w+",
                r"superiority",
            ],
        ),
    ])
});

/// The default legal-doctrine table, compiled once per process.
pub fn default_rule_table() -> &'static RuleTable {
    &DEFAULT_TABLE
}

static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| {
    // Two or more line breaks, tolerating horizontal whitespace between them.
    Regex::new(r"\r?\n(?:[ \t]*\r?\n)+").expect("paragraph-break regex must compile")
});

pub(crate) fn paragraph_break() -> &'static Regex {
    &PARAGRAPH_BREAK
}
