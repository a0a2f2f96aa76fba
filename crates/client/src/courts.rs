//! Court shortcuts for common queries.

/// Shortcut → CourtListener court ID.
const COURT_SHORTCUTS: &[(&str, &str)] = &[
    ("scotus", "scotus"),
    ("supreme", "scotus"),
    ("1st", "ca1"),
    ("2nd", "ca2"),
    ("3rd", "ca3"),
    ("4th", "ca4"),
    ("5th", "ca5"),
    ("6th", "ca6"),
    ("7th", "ca7"),
    ("8th", "ca8"),
    ("9th", "ca9"),
    ("10th", "ca10"),
    ("11th", "ca11"),
    ("dc", "cadc"),
    ("federal", "cafc"),
];

pub fn court_shortcuts() -> &'static [(&'static str, &'static str)] {
    COURT_SHORTCUTS
}

/// Resolve a shortcut to a court ID; anything unrecognized is passed through
/// lowercased (it may already be a real court ID).
pub fn resolve_court(court: &str) -> String {
    let lowered = court.to_lowercase();
    COURT_SHORTCUTS
        .iter()
        .find(|(shortcut, _)| *shortcut == lowered)
        .map(|(_, id)| (*id).to_string())
        .unwrap_or(lowered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_shortcuts_case_insensitively() {
        assert_eq!(resolve_court("Supreme"), "scotus");
        assert_eq!(resolve_court("9th"), "ca9");
        assert_eq!(resolve_court("DC"), "cadc");
    }

    #[test]
    fn passes_unknown_courts_through_lowercased() {
        assert_eq!(resolve_court("CA9"), "ca9");
        assert_eq!(resolve_court("nysd"), "nysd");
    }
}
