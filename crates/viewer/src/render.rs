//! Pure markup rendering for the case list and opinion detail pane.

use courtfinder_classifier::{ClassifiedParagraph, RuleTable};
use courtfinder_records::{CollectionStats, OpinionRecord};

use crate::html::{escape_html, escape_with_breaks, format_count};

/// Render the case list. `visible` holds indices into `records` (the filtered
/// subset, full range when unfiltered); `selected` is the working-set index of
/// the current selection. At most one row carries `active`, and only while it
/// is visible.
pub fn render_list(
    records: &[OpinionRecord],
    visible: &[usize],
    selected: Option<usize>,
) -> String {
    let mut out = String::from("<ul class=\"case-list\">\n");
    for &index in visible {
        let Some(record) = records.get(index) else {
            continue;
        };
        let active = if selected == Some(index) {
            " active"
        } else {
            ""
        };
        out.push_str(&format!(
            "<li class=\"case-item{active}\" data-index=\"{index}\">"
        ));
        out.push_str(&format!(
            "<span class=\"case-name\">{}</span>",
            escape_html(record.display_name())
        ));
        if record.pdf_url.is_some() {
            out.push_str("<span class=\"pdf-badge\">PDF</span>");
        }
        let mut meta: Vec<String> = Vec::new();
        if !record.display_date().is_empty() {
            meta.push(escape_html(record.display_date()));
        }
        if !record.display_court().is_empty() {
            meta.push(escape_html(record.display_court()));
        }
        if let Some(words) = record.word_count {
            meta.push(format!("{} words", format_count(words)));
        }
        if !meta.is_empty() {
            out.push_str(&format!(
                "<span class=\"case-meta\">{}</span>",
                meta.join(" &middot; ")
            ));
        }
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");
    out
}

/// Render one record's detail pane.
///
/// A record carrying a fetch `error` renders only the error placeholder; the
/// text body is never attempted. Otherwise: metadata strip, optional syllabus
/// block (classified like the body), then the classified body text or a
/// no-text placeholder.
pub fn render_detail(record: &OpinionRecord, rules: &RuleTable) -> String {
    if record.has_error() {
        return format!(
            "<div class=\"error-message\">Could not load this opinion: {}</div>\n",
            escape_html(record.error.as_deref().unwrap_or(""))
        );
    }

    let mut out = String::new();
    out.push_str(&format!(
        "<h2 class=\"case-title\">{}</h2>\n",
        escape_html(record.display_name())
    ));
    out.push_str(&render_meta_strip(record));

    if let Some(syllabus) = record.syllabus.as_deref().filter(|s| !s.trim().is_empty()) {
        out.push_str("<div class=\"syllabus\">\n");
        for paragraph in rules.classify(syllabus) {
            out.push_str(&render_paragraph(&paragraph));
        }
        out.push_str("</div>\n");
    }

    if record.has_text() {
        for paragraph in rules.classify(record.text.as_deref().unwrap_or("")) {
            out.push_str(&render_paragraph(&paragraph));
        }
    } else {
        out.push_str("<div class=\"no-text\">No opinion text available.</div>\n");
    }
    out
}

fn render_meta_strip(record: &OpinionRecord) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(citation) = record.citation.as_deref().filter(|s| !s.is_empty()) {
        parts.push(escape_html(citation));
    }
    if !record.display_date().is_empty() {
        parts.push(escape_html(record.display_date()));
    }
    if !record.display_court().is_empty() {
        parts.push(escape_html(record.display_court()));
    }
    if !record.display_judges().is_empty() {
        parts.push(escape_html(record.display_judges()));
    }
    if let Some(pdf) = record.pdf_url.as_deref() {
        let label = match record.pdf_page_count {
            Some(pages) => format!("PDF ({pages} pages)"),
            None => "PDF".to_string(),
        };
        parts.push(format!(
            "<a href=\"{}\" class=\"pdf-link\">{label}</a>",
            escape_html(pdf)
        ));
    }
    if let Some(url) = record.source_url.as_deref() {
        parts.push(format!(
            "<a href=\"{}\" class=\"source-link\">CourtListener</a>",
            escape_html(url)
        ));
    }
    if let Some(url) = record.scholar_url.as_deref() {
        parts.push(format!(
            "<a href=\"{}\" class=\"scholar-link\">Google Scholar</a>",
            escape_html(url)
        ));
    }
    if parts.is_empty() {
        return String::new();
    }
    format!(
        "<div class=\"case-meta\">{}</div>\n",
        parts.join(" &middot; ")
    )
}

fn render_paragraph(paragraph: &ClassifiedParagraph) -> String {
    let mut classes = String::from("paragraph");
    if !paragraph.categories.is_empty() {
        classes.push_str(" highlighted");
        for category in &paragraph.categories {
            classes.push_str(" highlight-");
            classes.push_str(category);
        }
    }
    format!(
        "<div class=\"{classes}\">{}</div>\n",
        escape_with_breaks(&paragraph.text)
    )
}

/// Render aggregate statistics for a full working set.
pub fn render_stats(stats: &CollectionStats) -> String {
    format!(
        "<div class=\"stats\">{} cases &middot; {} words &middot; {} courts</div>\n",
        format_count(stats.total_cases as u64),
        format_count(stats.total_words),
        stats.distinct_courts
    )
}

/// Render the list-level error state shown when the record source failed to
/// load. Takes the place of the list; the working set stays empty.
pub fn render_load_error(message: &str) -> String {
    format!(
        "<div class=\"error-message\">Failed to load cases: {}</div>\n",
        escape_html(message)
    )
}
