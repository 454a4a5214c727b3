use serde::Serialize;

/// A named category of changes within an entry (e.g. "Added", "Fixed").
///
/// Titles are unique within an entry; uniqueness is maintained by the parser,
/// which restarts the item list of a repeated title in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogSection {
    pub title: String,
    pub items: Vec<String>,
}

impl ChangelogSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }
}

/// One version's changelog block.
///
/// `version` and `date` are free-form text captured from the heading line;
/// neither is validated or normalized. Sections keep the order in which their
/// titles first appeared in the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogEntry {
    pub version: String,
    pub date: String,
    pub sections: Vec<ChangelogSection>,
}

impl ChangelogEntry {
    pub fn new(version: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: date.into(),
            sections: Vec::new(),
        }
    }

    /// Looks up a section by title.
    #[must_use]
    pub fn section(&self, title: &str) -> Option<&ChangelogSection> {
        self.sections.iter().find(|section| section.title == title)
    }
}
