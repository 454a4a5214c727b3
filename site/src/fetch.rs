//! Remote changelog fetch and the fetch→parse→render pipeline.

use std::time::Duration;

use changelog::{EntryRenderer, HtmlRenderer, Parser};
use reqwest::Client;
use url::Url;

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};

/// Raw-file endpoint the changelog document is fetched from.
pub const DEFAULT_CHANGELOG_URL: &str =
    "https://raw.githubusercontent.com/Nhqvu2005/VibeGravityKit/refs/heads/main/CHANGELOG.md";

/// Human-facing page linked from the fallback message.
pub const DEFAULT_SOURCE_LINK: &str =
    "https://github.com/Nhqvu2005/VibeGravityKit/blob/main/CHANGELOG.md";

/// Fragment shown when the document is unavailable; links out to the source
/// so the reader can still get at the changelog.
#[must_use]
pub fn fallback_fragment(source_link: &str) -> String {
    format!(
        "<p style=\"color:var(--text-muted)\">Could not load changelog. \
         <a href=\"{source_link}\" target=\"_blank\">View on GitHub \u{2192}</a></p>"
    )
}

/// Fetches the changelog document from its fixed remote URL.
///
/// One outstanding request per call, no retries, no cancellation. Transport
/// failures and non-success responses both mean the same thing to callers:
/// the document is unavailable.
pub struct ChangelogFetcher {
    client: Client,
    url: Url,
    source_link: String,
}

impl ChangelogFetcher {
    /// Create a fetcher for the given endpoint.
    ///
    /// # Errors
    /// Returns an error if the URL does not parse or the client cannot be
    /// constructed.
    pub fn new(url: &str, source_link: impl Into<String>, timeout: Duration) -> Result<Self> {
        let url = Url::parse(url)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url,
            source_link: source_link.into(),
        })
    }

    /// Create a fetcher from the site configuration.
    ///
    /// # Errors
    /// Same conditions as [`ChangelogFetcher::new`].
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        Self::new(
            &config.changelog_url,
            config.source_link.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn source_link(&self) -> &str {
        &self.source_link
    }

    /// Fetch the raw document body.
    ///
    /// # Errors
    /// Returns an error on any transport failure or non-success status.
    pub async fn fetch(&self) -> Result<String> {
        let response = self.client.get(self.url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(SiteError::BadStatus {
                status: response.status().as_u16(),
                url: self.url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

/// The canonical pipeline for the changelog panel.
///
/// On success the document is parsed and rendered (zero entries render their
/// own fallback); on any failure the static unavailable-fallback is returned.
/// Never a partial render, never an error.
pub async fn load_changelog_html(fetcher: &ChangelogFetcher) -> String {
    match fetcher.fetch().await {
        Ok(document) => {
            let entries = Parser::new().parse(&document);
            HtmlRenderer::new().render(&entries)
        }
        Err(_) => fallback_fragment(fetcher.source_link()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_fragment_embeds_the_source_link() {
        let fragment = fallback_fragment("https://example.com/CHANGELOG.md");
        assert!(fragment.contains("Could not load changelog."));
        assert!(fragment.contains("href=\"https://example.com/CHANGELOG.md\""));
    }

    #[test]
    fn invalid_url_is_rejected_up_front() {
        let result = ChangelogFetcher::new("not a url", "link", Duration::from_secs(1));
        assert!(matches!(result, Err(SiteError::UrlParse(_))));
    }

    #[test]
    fn fetcher_exposes_its_configured_endpoint() {
        let fetcher = ChangelogFetcher::new(
            DEFAULT_CHANGELOG_URL,
            DEFAULT_SOURCE_LINK,
            Duration::from_secs(30),
        )
        .unwrap();
        assert_eq!(fetcher.url().as_str(), DEFAULT_CHANGELOG_URL);
        assert_eq!(fetcher.source_link(), DEFAULT_SOURCE_LINK);
    }
}
