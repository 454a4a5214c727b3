use std::io::{self, Read};

use site::{copy_snippet, CopyFeedback, WriterClipboard};

use crate::error::{CliError, Result};

pub fn execute(text: Option<String>) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let stdout = io::stdout();
    let mut clipboard = WriterClipboard::new(stdout.lock());
    match copy_snippet(&mut clipboard, &text) {
        CopyFeedback::Copied => {
            eprintln!("{}", CopyFeedback::Copied.label());
            Ok(())
        }
        CopyFeedback::Failed => Err(CliError::Other("Failed to copy snippet".to_string())),
    }
}
