//! Imperative shell for the docs page behavior layer.
//!
//! The changelog core stays pure in the `changelog` crate; this crate owns
//! everything that touches the outside world: the remote document fetch with
//! its single fallback path, TOML configuration, the persisted
//! language/theme application state, and the page glue (nav highlighting,
//! menu state, copy-to-clipboard) modeled as pure functions over explicit
//! inputs.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod fetch;
pub mod nav;
pub mod state;

pub use clipboard::{copy_snippet, Clipboard, CopyFeedback, MemoryClipboard, WriterClipboard};
pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use fetch::{
    fallback_fragment, load_changelog_html, ChangelogFetcher, DEFAULT_CHANGELOG_URL,
    DEFAULT_SOURCE_LINK,
};
pub use nav::{active_section, is_active_link, MenuState, SectionAnchor, SCROLL_OFFSET};
pub use state::{AppState, ParseThemeError, Theme, LANGUAGE_KEY, THEME_KEY};
