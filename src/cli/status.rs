use clap::Parser;

/// Arguments for the status command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Full report:\n    connect-doctor status\n\n\
                  Include every probed location:\n    connect-doctor status --detailed\n\n\
                  Machine-readable output:\n    connect-doctor status --json\n\n\
                  Inspect a mounted volume:\n    connect-doctor --root \"/Volumes/Macintosh HD\" status")]
pub struct StatusArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Show every probed location and its outcome
    #[arg(long)]
    pub detailed: bool,
}
