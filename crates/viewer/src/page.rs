//! Thin display-surface adapter: wraps rendered fragments into a standalone
//! HTML document with a stylesheet hooked on the stable class names.

use crate::html::escape_html;
use crate::Viewer;

const STYLESHEET: &str = "\
body { font-family: Georgia, serif; margin: 0; display: flex; height: 100vh; }
.sidebar { width: 22rem; overflow-y: auto; border-right: 1px solid #ccc; padding: 1rem; }
.detail { flex: 1; overflow-y: auto; padding: 1rem 2rem; }
.stats { color: #666; font-size: 0.85rem; margin-bottom: 0.75rem; }
.case-list { list-style: none; margin: 0; padding: 0; }
.case-item { padding: 0.5rem; border-bottom: 1px solid #eee; cursor: pointer; }
.case-item.active { background: #eef3fb; }
.case-name { display: block; font-weight: bold; }
.case-meta { color: #666; font-size: 0.85rem; }
.pdf-badge { background: #b03030; color: #fff; font-size: 0.7rem; padding: 0 0.3rem; margin-left: 0.4rem; border-radius: 2px; }
.syllabus { background: #f7f5ee; border-left: 3px solid #c9b458; padding: 0.75rem 1rem; margin: 1rem 0; font-style: italic; }
.paragraph { margin: 0.75rem 0; line-height: 1.5; }
.highlighted { border-radius: 2px; }
.highlight-injury { background: #fde8e8; }
.highlight-rule23 { background: #e8f0fd; }
.highlight-predominance { background: #e9f7e9; }
.error-message { color: #b03030; padding: 1rem; }
.no-text { color: #666; font-style: italic; padding: 1rem 0; }
";

/// Render a full static page: stats + list in a sidebar, the selected record's
/// detail beside it. `query` pre-filters the visible list.
pub fn render_page(title: &str, viewer: &Viewer, query: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{STYLESHEET}</style>\n</head>\n<body>\n\
         <div class=\"sidebar\">\n{stats}{list}</div>\n\
         <div class=\"detail\">\n{detail}</div>\n</body>\n</html>\n",
        title = escape_html(title),
        stats = viewer.render_stats(),
        list = viewer.render_list(query),
        detail = viewer.render_detail(),
    )
}

/// Render a page whose list pane is replaced by a load-failure message. Used
/// when the record source was unreachable or malformed; the working set stays
/// empty.
pub fn render_error_page(title: &str, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{STYLESHEET}</style>\n</head>\n<body>\n\
         <div class=\"sidebar\">\n{error}</div>\n\
         <div class=\"detail\">\n</div>\n</body>\n</html>\n",
        title = escape_html(title),
        error = crate::render::render_load_error(message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_page_shows_the_load_failure() {
        let page = render_error_page("Cases", "expected a JSON array");
        assert!(page.contains("Failed to load cases: expected a JSON array"));
        assert!(!page.contains("<li class=\"case-item"));
    }

    #[test]
    fn page_wraps_list_and_detail() {
        let mut viewer = Viewer::new();
        viewer
            .load_json(r#"[{"caseName": "A v. B", "text": "Standing is lacking."}]"#)
            .unwrap();
        viewer.select(0);
        let page = render_page("Cases <test>", &viewer, "");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Cases &lt;test&gt;</title>"));
        assert!(page.contains("case-item"));
        assert!(page.contains("highlight-injury"));
    }
}
