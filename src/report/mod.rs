//! Diagnostic report assembly
//!
//! Pure composition of the two resolved component statuses with the
//! auxiliary system checks in [`system`]. No decision logic lives here.

pub mod system;

pub use system::{
    AuthChainStatus, CommandRunner, DaemonStatus, SystemCommandRunner, TicketStatus,
};

use serde::Serialize;

use crate::config::Settings;
use crate::domain::ComponentKind;
use crate::probe::VersionSource;
use crate::resolver::{self, ResolvedStatus};

/// One component with its display line
#[derive(Debug, Clone, Serialize)]
pub struct ComponentReport {
    pub summary: String,
    #[serde(flatten)]
    pub status: ResolvedStatus,
}

impl From<ResolvedStatus> for ComponentReport {
    fn from(status: ResolvedStatus) -> Self {
        Self {
            summary: status.status_line(),
            status,
        }
    }
}

/// Everything one diagnostic run found
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub threshold: String,
    pub menu_bar: ComponentReport,
    pub login_window: ComponentReport,
    pub daemon: DaemonStatus,
    pub auth_chain: AuthChainStatus,
    pub tickets: TicketStatus,
}

/// Run every probe and check once and collect the results
pub fn assemble(
    settings: &Settings,
    source: &dyn VersionSource,
    runner: &dyn CommandRunner,
) -> DiagnosticReport {
    let threshold = &settings.threshold;

    DiagnosticReport {
        threshold: threshold.to_string(),
        menu_bar: resolver::resolve(ComponentKind::MenuBarAgent, source, threshold).into(),
        login_window: resolver::resolve(ComponentKind::LoginWindowAgent, source, threshold).into(),
        daemon: system::check_daemons(settings, runner),
        auth_chain: system::check_auth_chain(settings, runner),
        tickets: system::check_tickets(runner),
    }
}
