//! Text cleanup for API payloads: tag stripping and citation parsing.

use once_cell::sync::Lazy;
use regex::Regex;

static TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));
static ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(?:#x?[0-9a-fA-F]+|[a-zA-Z]+);").expect("entity regex"));
static CITATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+([A-Za-z\.\s]+?)\s+(\d+)").expect("citation regex"));

/// Remove HTML tags, decode entities, and collapse whitespace. The API serves
/// some opinion bodies only as markup; agents want plain text.
pub fn strip_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let stripped = TAGS.replace_all(text, "");
    let decoded = decode_entities(&stripped);
    WHITESPACE.replace_all(&decoded, " ").trim().to_string()
}

fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let entity = &caps[0][1..caps[0].len() - 1];
            match entity {
                "amp" => "&".to_string(),
                "lt" => "<".to_string(),
                "gt" => ">".to_string(),
                "quot" => "\"".to_string(),
                "apos" => "'".to_string(),
                "nbsp" => " ".to_string(),
                "sect" => "\u{00a7}".to_string(),
                "para" => "\u{00b6}".to_string(),
                "mdash" => "\u{2014}".to_string(),
                "ndash" => "\u{2013}".to_string(),
                _ => decode_numeric(entity).unwrap_or_else(|| caps[0].to_string()),
            }
        })
        .into_owned()
}

fn decode_numeric(entity: &str) -> Option<String> {
    let digits = entity.strip_prefix('#')?;
    let code = match digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    char::from_u32(code).map(String::from)
}

/// Turn a citation string into a search query. A recognized
/// `volume reporter page` shape becomes a scoped `citation:"…"` query;
/// anything else is quoted verbatim.
pub fn citation_query(citation: &str) -> String {
    match CITATION.captures(citation) {
        Some(caps) => format!(
            "citation:\"{} {} {}\"",
            &caps[1],
            caps[2].trim(),
            &caps[3]
        ),
        None => format!("\"{citation}\""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_tags_and_collapses_whitespace() {
        assert_eq!(
            strip_html("<p>Held:  reversed\n<em>and</em> remanded.</p>"),
            "Held: reversed and remanded."
        );
    }

    #[test]
    fn decodes_named_and_numeric_entities() {
        assert_eq!(strip_html("Smith &amp; Jones"), "Smith & Jones");
        assert_eq!(strip_html("&sect;&nbsp;1983"), "\u{00a7} 1983");
        assert_eq!(strip_html("&#167; 1983"), "\u{00a7} 1983");
        assert_eq!(strip_html("&#x2014;dash"), "\u{2014}dash");
    }

    #[test]
    fn leaves_unknown_entities_alone() {
        assert_eq!(strip_html("&bogus; stays"), "&bogus; stays");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(strip_html(""), "");
    }

    #[test]
    fn recognized_citations_become_scoped_queries() {
        assert_eq!(citation_query("410 U.S. 113"), "citation:\"410 U.S. 113\"");
        assert_eq!(citation_query("347 U.S. 483"), "citation:\"347 U.S. 483\"");
    }

    #[test]
    fn unrecognized_citations_are_quoted_verbatim() {
        assert_eq!(citation_query("Roe v. Wade"), "\"Roe v. Wade\"");
        // Digit-bearing reporters like F.3d fall outside the volume/page
        // shape and go through as a quoted phrase.
        assert_eq!(citation_query("123 F.3d 456"), "\"123 F.3d 456\"");
    }
}
