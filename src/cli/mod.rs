//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - status: Status command arguments
//! - compare: Compare command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod compare;
pub mod completions;
pub mod status;

pub use compare::CompareArgs;
pub use completions::CompletionsArgs;
pub use status::StatusArgs;

use crate::config::Overrides;

/// connect-doctor - connect agent diagnostics
///
/// Detect which generation of the connect agent is installed and flag leftovers.
#[derive(Parser, Debug)]
#[command(
    name = "connect-doctor",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Diagnose connect agent installations on managed Macs",
    long_about = "connect-doctor detects which generation of the connect agent is installed \
                  (stand-alone or bundled with the companion app), reports leftovers from \
                  other generations, and checks the daemon, login authorization chain and \
                  Kerberos tickets. Run without a command for the interactive menu.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  connect-doctor                         \x1b[90m# Interactive menu\x1b[0m\n   \
                  connect-doctor status                  \x1b[90m# Full diagnostic report\x1b[0m\n   \
                  connect-doctor menubar                 \x1b[90m# Menu bar agent status line\x1b[0m\n   \
                  connect-doctor loginwindow             \x1b[90m# Login window agent status line\x1b[0m\n   \
                  connect-doctor compare 2.45.1 3.0.0    \x1b[90m# Compare two versions\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Filesystem root to inspect (defaults to /)
    #[arg(long, global = true, value_name = "DIR", env = "CONNECT_DOCTOR_ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to <config dir>/connect-doctor/config.yaml when present)
    #[arg(long, short = 'c', global = true, value_name = "FILE", env = "CONNECT_DOCTOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Version separating legacy from modern builds
    #[arg(long, global = true, value_name = "VERSION")]
    pub threshold: Option<String>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            root: self.root.clone(),
            config: self.config.clone(),
            threshold: self.threshold.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full diagnostic report
    Status(StatusArgs),

    /// Menu bar agent status line
    #[command(name = "menubar")]
    MenuBar,

    /// Login window agent status line
    #[command(name = "loginwindow")]
    LoginWindow,

    /// Compare two version strings and classify them
    Compare(CompareArgs),

    /// Interactive numbered menu (default)
    Menu,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
