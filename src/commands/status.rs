//! Status command implementation

use crate::cli::StatusArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::probe::BundleProbe;
use crate::report::{self, DiagnosticReport, SystemCommandRunner};
use crate::ui;

/// Probe the machine described by `settings`
pub fn build_report(settings: &Settings) -> DiagnosticReport {
    report::assemble(settings, &BundleProbe::new(settings), &SystemCommandRunner)
}

/// Run status command
pub fn run(settings: &Settings, args: StatusArgs) -> Result<()> {
    let report = build_report(settings);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", ui::render_report(&report, args.detailed));
    }

    Ok(())
}
