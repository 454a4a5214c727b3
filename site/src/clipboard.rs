//! Copy-to-clipboard affordance behind a write port.

use std::io::{self, Write};

/// Idle label of a copy control.
pub const COPY_LABEL: &str = "Copy";

/// Destination the copy affordance writes snippets to.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Outcome of a copy attempt, with the user-visible feedback label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFeedback {
    Copied,
    Failed,
}

impl CopyFeedback {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Copied => "\u{2713} Copied!",
            Self::Failed => "\u{2717} Failed",
        }
    }
}

/// Trims the snippet and writes it through the port, reporting feedback
/// rather than an error: a failed copy is user feedback, not a fault.
pub fn copy_snippet(clipboard: &mut dyn Clipboard, text: &str) -> CopyFeedback {
    match clipboard.write_text(text.trim()) {
        Ok(()) => CopyFeedback::Copied,
        Err(_) => CopyFeedback::Failed,
    }
}

/// Adapts any writer into a clipboard target.
pub struct WriterClipboard<W: Write> {
    writer: W,
}

impl<W: Write> WriterClipboard<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Clipboard for WriterClipboard<W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}

/// In-memory clipboard for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "clipboard unavailable"))
        }
    }

    #[test]
    fn snippets_are_trimmed_before_copying() {
        let mut clipboard = MemoryClipboard::new();
        let feedback = copy_snippet(&mut clipboard, "  pip install vibegravitykit  \n");
        assert_eq!(feedback, CopyFeedback::Copied);
        assert_eq!(
            clipboard.contents.as_deref(),
            Some("pip install vibegravitykit")
        );
    }

    #[test]
    fn failures_surface_as_feedback_not_errors() {
        let feedback = copy_snippet(&mut BrokenClipboard, "text");
        assert_eq!(feedback, CopyFeedback::Failed);
        assert_eq!(feedback.label(), "\u{2717} Failed");
    }

    #[test]
    fn writer_clipboard_captures_the_snippet() {
        let mut clipboard = WriterClipboard::new(Vec::new());
        let feedback = copy_snippet(&mut clipboard, "vibegravity init\n");
        assert_eq!(feedback, CopyFeedback::Copied);
        assert_eq!(clipboard.into_inner(), b"vibegravity init");
    }

    #[test]
    fn copied_label_confirms() {
        assert_eq!(CopyFeedback::Copied.label(), "\u{2713} Copied!");
        assert_eq!(COPY_LABEL, "Copy");
    }
}
