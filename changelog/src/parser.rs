use crate::patterns::{ITEM_PATTERN, SECTION_HEADING_PATTERN, VERSION_HEADING_PATTERN};
use crate::types::{ChangelogEntry, ChangelogSection};

/// Parse position within the document.
///
/// Items attach only in `InSection`; section headings are dropped in
/// `NoEntry`. The open entry travels with the state and is flushed to the
/// output when the next version heading starts or the input ends.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseState {
    NoEntry,
    InEntry {
        entry: ChangelogEntry,
    },
    InSection {
        entry: ChangelogEntry,
        section: usize,
    },
}

impl ParseState {
    /// A version heading always starts a fresh entry, flushing the open one.
    fn start_entry(self, version: String, date: String, out: &mut Vec<ChangelogEntry>) -> Self {
        if let Some(finished) = self.into_entry() {
            out.push(finished);
        }
        Self::InEntry {
            entry: ChangelogEntry::new(version, date),
        }
    }

    /// A section heading opens a section under the current entry. Outside an
    /// entry it is dropped. A title already present in the entry keeps its
    /// first-seen position and has its item list restarted.
    fn start_section(self, title: String) -> Self {
        match self {
            Self::NoEntry => Self::NoEntry,
            Self::InEntry { mut entry } | Self::InSection { mut entry, .. } => {
                let section = match entry.sections.iter().position(|s| s.title == title) {
                    Some(existing) => {
                        entry.sections[existing].items.clear();
                        existing
                    }
                    None => {
                        entry.sections.push(ChangelogSection::new(title));
                        entry.sections.len() - 1
                    }
                };
                Self::InSection { entry, section }
            }
        }
    }

    /// A bullet line appends to the open section; without one it is dropped.
    fn push_item(self, text: String) -> Self {
        match self {
            Self::InSection { mut entry, section } => {
                entry.sections[section].items.push(text);
                Self::InSection { entry, section }
            }
            other => other,
        }
    }

    fn into_entry(self) -> Option<ChangelogEntry> {
        match self {
            Self::NoEntry => None,
            Self::InEntry { entry } | Self::InSection { entry, .. } => Some(entry),
        }
    }
}

/// Single-pass changelog parser.
///
/// `parse` never fails: lines that match no pattern, items outside a section,
/// and sections outside an entry are silently ignored, so the worst case for
/// arbitrary input is an empty result.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn parse(&self, content: &str) -> Vec<ChangelogEntry> {
        let mut entries = Vec::new();
        let mut state = ParseState::NoEntry;

        for line in content.lines() {
            state = Self::parse_line(line.trim(), state, &mut entries);
        }

        if let Some(open) = state.into_entry() {
            entries.push(open);
        }
        entries
    }

    fn parse_line(line: &str, state: ParseState, entries: &mut Vec<ChangelogEntry>) -> ParseState {
        if let Some(captures) = VERSION_HEADING_PATTERN.captures(line) {
            let version = captures[1].trim().to_string();
            let date = captures[2].trim().to_string();
            state.start_entry(version, date, entries)
        } else if let Some(captures) = SECTION_HEADING_PATTERN.captures(line) {
            state.start_section(captures[1].trim().to_string())
        } else if let Some(captures) = ITEM_PATTERN.captures(line) {
            state.push_item(captures[1].trim().to_string())
        } else {
            state
        }
    }
}
