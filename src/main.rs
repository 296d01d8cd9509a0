//! connect-doctor - connect agent diagnostics
//!
//! Detects which generation and topology of the connect agent is installed on
//! a managed Mac (stand-alone or bundled with the companion app), flags
//! leftovers from other generations, and checks the pieces around it.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod logging;
mod probe;
mod report;
mod resolver;
mod ui;
mod version;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use config::Settings;
use domain::ComponentKind;
use error::Result;

fn run(cli: Cli) -> Result<()> {
    let overrides = cli.overrides();

    // Only commands that inspect the machine need settings
    let load = || -> Result<Settings> {
        let settings = Settings::load(&overrides)?;
        tracing::debug!(
            root = %settings.root.display(),
            threshold = %settings.threshold,
            "settings loaded"
        );
        Ok(settings)
    };

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Status(args) => commands::status::run(&load()?, args),
        Commands::MenuBar => commands::component::run(&load()?, ComponentKind::MenuBarAgent),
        Commands::LoginWindow => {
            commands::component::run(&load()?, ComponentKind::LoginWindowAgent)
        }
        Commands::Compare(args) => commands::compare::run(&load()?, args),
        Commands::Menu => commands::menu::run(&load()?),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {}", help);
        }
        std::process::exit(1);
    }
}
