//! Entry renderers for the changelog panel and tooling output.

use crate::types::ChangelogEntry;

/// Shown in place of the list when the document parses to zero entries.
pub const EMPTY_FALLBACK: &str = "<p>No changelog entries found.</p>";

/// Renders parsed entries to a string in a specific format.
pub trait EntryRenderer {
    fn render(&self, entries: &[ChangelogEntry]) -> String;
}

/// Escapes item text for embedding in the HTML fragment.
///
/// Exactly `&`, `<` and `>` are rewritten, in that order, in a single pass.
/// Quotes pass through untouched. The renderer applies this to item text only;
/// version, date and section titles are emitted verbatim, which is part of the
/// rendered-output contract.
#[must_use]
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// HTML renderer producing the changelog panel fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EntryRenderer for HtmlRenderer {
    fn render(&self, entries: &[ChangelogEntry]) -> String {
        if entries.is_empty() {
            return EMPTY_FALLBACK.to_string();
        }

        let mut html = String::with_capacity(entries.len() * 256);
        for entry in entries {
            html.push_str("<div class=\"cl-entry\">");
            html.push_str(&format!(
                "<div class=\"cl-version\"><code>v{}</code> <span class=\"cl-date\">{}</span></div>",
                entry.version, entry.date
            ));
            for section in &entry.sections {
                html.push_str(&format!(
                    "<div class=\"cl-section\"><h4>{}</h4><ul>",
                    section.title
                ));
                for item in &section.items {
                    html.push_str(&format!("<li>{}</li>", escape_text(item)));
                }
                html.push_str("</ul></div>");
            }
            html.push_str("</div>");
        }
        html
    }
}

/// JSON renderer for tooling and diagnostics.
pub struct JsonRenderer {
    /// Whether to pretty-print the JSON output
    pub pretty: bool,
}

impl JsonRenderer {
    /// Create a new JSON renderer with pretty printing
    #[must_use]
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a JSON renderer with compact output
    #[must_use]
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryRenderer for JsonRenderer {
    fn render(&self, entries: &[ChangelogEntry]) -> String {
        if self.pretty {
            serde_json::to_string_pretty(entries).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(entries).unwrap_or_else(|_| "[]".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangelogSection;

    fn entry_with(title: &str, items: &[&str]) -> ChangelogEntry {
        let mut entry = ChangelogEntry::new("1.0.0", "2024-01-01");
        let mut section = ChangelogSection::new(title);
        section.items = items.iter().map(|i| (*i).to_string()).collect();
        entry.sections.push(section);
        entry
    }

    #[test]
    fn empty_input_renders_fallback_message() {
        let html = HtmlRenderer::new().render(&[]);
        assert_eq!(html, EMPTY_FALLBACK);
        assert!(!html.is_empty());
    }

    #[test]
    fn item_text_is_escaped() {
        let entry = entry_with("Added", &["<script>alert(1)</script>"]);
        let html = HtmlRenderer::new().render(&[entry]);
        assert!(html.contains("<li>&lt;script&gt;alert(1)&lt;/script&gt;</li>"));
        assert!(!html.contains("<li><script>"));
    }

    #[test]
    fn section_title_is_not_escaped() {
        let entry = entry_with("<b>Added</b>", &["item"]);
        let html = HtmlRenderer::new().render(&[entry]);
        assert!(html.contains("<h4><b>Added</b></h4>"));
    }

    #[test]
    fn version_and_date_are_not_escaped() {
        let mut entry = entry_with("Added", &["item"]);
        entry.version = "1.0.0<beta>".to_string();
        entry.date = "2024 & later".to_string();
        let html = HtmlRenderer::new().render(&[entry]);
        assert!(html.contains("<code>v1.0.0<beta></code>"));
        assert!(html.contains("<span class=\"cl-date\">2024 & later</span>"));
    }

    #[test]
    fn escape_rewrites_ampersand_before_angle_brackets() {
        assert_eq!(escape_text("a & <b>"), "a &amp; &lt;b&gt;");
    }

    #[test]
    fn escape_is_single_pass_over_already_escaped_text() {
        assert_eq!(escape_text("&lt;"), "&amp;lt;");
    }

    #[test]
    fn escape_leaves_quotes_alone() {
        assert_eq!(escape_text(r#"say "hi" & 'bye'"#), r#"say "hi" & 'bye'"#);
    }

    #[test]
    fn sections_render_in_insertion_order() {
        let mut entry = ChangelogEntry::new("1.0.0", "2024-01-01");
        entry.sections.push(ChangelogSection::new("Zeta"));
        entry.sections.push(ChangelogSection::new("Alpha"));
        let html = HtmlRenderer::new().render(&[entry]);
        let zeta = html.find("<h4>Zeta</h4>").unwrap();
        let alpha = html.find("<h4>Alpha</h4>").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn json_renderer_serializes_entries() {
        let entry = entry_with("Added", &["item"]);
        let json = JsonRenderer::compact().render(&[entry]);
        assert!(json.contains("\"version\":\"1.0.0\""));
        assert!(json.contains("\"items\":[\"item\"]"));
    }
}
