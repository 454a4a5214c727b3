use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "vgk-docs")]
#[command(
    author,
    version,
    about = "Companion for the docs page: changelog rendering, language and theme preferences"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => f.write_str("html"),
            Self::Json => f.write_str("json"),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the changelog document and render the panel fragment
    Changelog {
        /// Override the changelog URL from the config
        #[clap(long)]
        url: Option<String>,

        /// Read the document from a local file instead of fetching
        #[clap(long, conflicts_with = "url")]
        file: Option<PathBuf>,

        /// Output format
        #[clap(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Write the fragment to a file instead of stdout
        #[clap(short, long)]
        output: Option<PathBuf>,

        /// Path to the site configuration file
        #[clap(long, default_value = "vgk-docs.toml")]
        config: PathBuf,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Show or toggle the display language (en/vi)
    Lang {
        /// Set a specific language instead of toggling
        #[clap(long, value_name = "CODE")]
        set: Option<String>,

        /// Print the current language without changing it
        #[clap(long, default_value_t = false)]
        show: bool,

        /// Path to the site configuration file
        #[clap(long, default_value = "vgk-docs.toml")]
        config: PathBuf,
    },

    /// Show or toggle the color theme (light/dark)
    Theme {
        /// Set a specific theme instead of toggling
        #[clap(long, value_name = "NAME")]
        set: Option<String>,

        /// Print the current theme without changing it
        #[clap(long, default_value_t = false)]
        show: bool,

        /// Path to the site configuration file
        #[clap(long, default_value = "vgk-docs.toml")]
        config: PathBuf,
    },

    /// Look up a translation key for the current language
    Translate {
        /// Catalog key, e.g. "nav.changelog"
        key: String,

        /// Path to the site configuration file
        #[clap(long, default_value = "vgk-docs.toml")]
        config: PathBuf,
    },

    /// Copy a snippet: trim it and write it to stdout
    Copy {
        /// Snippet text; read from stdin when omitted
        text: Option<String>,
    },
}
