//! Single-component status lines (`menubar`, `loginwindow`)

use crate::config::Settings;
use crate::domain::ComponentKind;
use crate::error::Result;
use crate::probe::BundleProbe;
use crate::resolver::{self, ResolvedStatus};

pub fn resolve(settings: &Settings, kind: ComponentKind) -> ResolvedStatus {
    resolver::resolve(kind, &BundleProbe::new(settings), &settings.threshold)
}

/// Print the plain status line, suitable for scripts
pub fn run(settings: &Settings, kind: ComponentKind) -> Result<()> {
    println!("{}", resolve(settings, kind).status_line());
    Ok(())
}
