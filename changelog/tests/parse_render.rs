use changelog::{ChangelogEntry, EntryRenderer, HtmlRenderer, Parser};

fn parse(content: &str) -> Vec<ChangelogEntry> {
    Parser::new().parse(content)
}

#[test]
fn well_formed_document_parses_to_expected_structure() {
    let content = "\
## [1.0.0] - 2024-01-01
### Added
- Initial release
### Fixed
- Nothing yet
";
    let entries = parse(content);
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert_eq!(entry.version, "1.0.0");
    assert_eq!(entry.date, "2024-01-01");

    let titles: Vec<_> = entry.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Added", "Fixed"]);
    assert_eq!(entry.section("Added").unwrap().items, ["Initial release"]);
    assert_eq!(entry.section("Fixed").unwrap().items, ["Nothing yet"]);
}

#[test]
fn entry_count_matches_version_heading_count() {
    let content = "\
# Changelog

## [3.0.0] - 2024-09-01
### Added
- big feature

## [2.5.1] - 2024-07-15

## [2.5.0] - 2024-07-01
### Fixed
- papercut
";
    let entries = parse(content);
    assert_eq!(entries.len(), 3);
}

#[test]
fn entry_order_follows_first_appearance_order() {
    let content = "## [b] - d1\n## [a] - d2\n## [c] - d3\n";
    let versions: Vec<String> = parse(content).into_iter().map(|e| e.version).collect();
    assert_eq!(versions, ["b", "a", "c"]);
}

#[test]
fn empty_string_parses_empty_and_renders_fallback() {
    let entries = parse("");
    assert!(entries.is_empty());

    let html = HtmlRenderer::new().render(&entries);
    assert_eq!(html, "<p>No changelog entries found.</p>");
}

#[test]
fn orphan_bullets_and_sections_never_surface() {
    let content = "\
- bullet before everything
### Section before any entry
- bullet under dropped section
## [1.0.0] - 2024-01-01
- bullet before first section
### Added
- the only real item
";
    let entries = parse(content);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].sections.len(), 1);
    assert_eq!(entries[0].section("Added").unwrap().items, ["the only real item"]);
}

#[test]
fn asymmetric_escaping_contract_holds_end_to_end() {
    let content = "\
## [1.0.0] - 2024-01-01
### <b>Added</b>
- uses <script> tags & entities
";
    let html = HtmlRenderer::new().render(&parse(content));
    // item text escaped, ampersand first
    assert!(html.contains("<li>uses &lt;script&gt; tags &amp; entities</li>"));
    // section title emitted verbatim
    assert!(html.contains("<h4><b>Added</b></h4>"));
}

#[test]
fn rendered_fragment_matches_expected_shape() {
    let content = "\
## [1.2.0] - 2024-05-05
### Added
- one
- two
";
    let html = HtmlRenderer::new().render(&parse(content));
    assert_eq!(
        html,
        "<div class=\"cl-entry\">\
         <div class=\"cl-version\"><code>v1.2.0</code> <span class=\"cl-date\">2024-05-05</span></div>\
         <div class=\"cl-section\"><h4>Added</h4><ul><li>one</li><li>two</li></ul></div>\
         </div>"
    );
}

#[test]
fn parse_then_render_is_stable_across_runs() {
    let content = "\
## [2.0.0] - 2024-02-02
### Changed
- reworked internals
## [1.0.0] - 2024-01-01
### Added
- Initial release
";
    let first = HtmlRenderer::new().render(&parse(content));
    let second = HtmlRenderer::new().render(&parse(content));
    assert_eq!(first, second);
}
