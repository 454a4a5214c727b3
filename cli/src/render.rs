use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use changelog::{EntryRenderer, HtmlRenderer, JsonRenderer, Parser};
use site::{fallback_fragment, ChangelogFetcher, SiteConfig};

use crate::cli::OutputFormat;
use crate::error::{CliError, Result};
use crate::ui;

pub fn execute(
    url: Option<String>,
    file: Option<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
    config_path: PathBuf,
    verbose: bool,
) -> Result<()> {
    let config = SiteConfig::load_or_default(&config_path)?;

    // Ok: the document text. Err: why it is unavailable. A missing local
    // file is a hard error; only the fetch degrades to the fallback path.
    let document: std::result::Result<String, String> = match file {
        Some(path) => Ok(fs::read_to_string(&path).map_err(|err| {
            CliError::Io(err).with_context(format!("Failed to read {}", path.display()))
        })?),
        None => fetch_document(url.as_deref(), &config, verbose)?,
    };

    let rendered = match (document, format) {
        (Ok(document), OutputFormat::Html) => {
            let entries = Parser::new().parse(&document);
            if verbose {
                ui::info_message(&format!("Parsed {} changelog entries", entries.len()));
            }
            HtmlRenderer::new().render(&entries)
        }
        (Ok(document), OutputFormat::Json) => {
            JsonRenderer::new().render(&Parser::new().parse(&document))
        }
        (Err(_), OutputFormat::Html) => fallback_fragment(&config.source_link),
        (Err(reason), OutputFormat::Json) => return Err(CliError::DocumentUnavailable(reason)),
    };

    match output {
        Some(path) => {
            fs::write(&path, rendered)?;
            ui::success_message(&format!("Wrote changelog to {}", path.display()));
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn fetch_document(
    url: Option<&str>,
    config: &SiteConfig,
    verbose: bool,
) -> Result<std::result::Result<String, String>> {
    let endpoint = url.unwrap_or(&config.changelog_url);
    let fetcher = ChangelogFetcher::new(
        endpoint,
        config.source_link.clone(),
        Duration::from_secs(config.timeout_seconds),
    )?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let spinner = ui::spinner("Fetching changelog");
    let fetched = runtime.block_on(fetcher.fetch());
    spinner.finish_and_clear();

    Ok(match fetched {
        Ok(document) => Ok(document),
        Err(err) => {
            if verbose {
                ui::warning_message(&format!("Falling back: {err}"));
            }
            Err(err.to_string())
        }
    })
}
