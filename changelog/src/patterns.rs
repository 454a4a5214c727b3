use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `## [version] - date`. Headings without the date tail (such as a
/// bare `## [Unreleased]`) do not match and start no entry.
pub static VERSION_HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^##\s*\[(.+?)\]\s*-\s*(.+)$").expect("Failed to compile version heading regex")
});

/// Matches `### Section Title`.
pub static SECTION_HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^###\s*(.+)$").expect("Failed to compile section heading regex")
});

/// Matches `- item` and `* item` bullet lines.
pub static ITEM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*]\s+(.+)$").expect("Failed to compile item regex"));
