mod cli;
mod copy;
mod error;
mod lang;
mod render;
mod store;
mod theme;
mod translate;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Changelog {
            url,
            file,
            format,
            output,
            config,
            verbose,
        } => render::execute(url, file, format, output, config, verbose),
        Commands::Lang { set, show, config } => lang::execute(set, show, config),
        Commands::Theme { set, show, config } => theme::execute(set, show, config),
        Commands::Translate { key, config } => translate::execute(&key, config),
        Commands::Copy { text } => copy::execute(text),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
