//! Changelog parsing and rendering for the docs page.
//!
//! This crate converts a raw version-history document following the
//! `## [version] - date` / `### Section` / `- item` convention into ordered
//! structured entries, and renders those entries as an HTML fragment for the
//! changelog panel. Parsing and rendering are pure: malformed input degrades
//! to fewer (or zero) entries rather than failing.

pub mod parser;
pub mod patterns;
pub mod renderer;
pub mod types;

pub use parser::Parser;
pub use renderer::{EntryRenderer, HtmlRenderer, JsonRenderer, escape_text};
pub use types::{ChangelogEntry, ChangelogSection};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_render_work_end_to_end() {
        let document = "## [1.0.0] - 2024-01-01\n### Added\n- Initial release\n";
        let entries = Parser::new().parse(document);
        assert_eq!(entries.len(), 1);

        let html = HtmlRenderer::new().render(&entries);
        assert!(html.contains("<code>v1.0.0</code>"));
        assert!(html.contains("<li>Initial release</li>"));
    }
}
