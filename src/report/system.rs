//! Auxiliary system checks: launchd daemon, login authorization chain, Kerberos tickets
//!
//! Each check shells out to a stock macOS utility through [`CommandRunner`].
//! A utility that cannot be started leaves the check in an `Unknown` state
//! rather than failing the report.

use serde::Serialize;
use std::process::Command;

use crate::config::{DaemonSpec, Settings};

/// Captured result of running an OS utility
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
}

/// Seam between the checks and the processes they spawn
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<CommandOutput>;
}

/// Runs utilities with [`std::process::Command`]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<CommandOutput> {
        let output = Command::new(program).args(args).output()?;
        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        })
    }
}

/// One launchd daemon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaemonState {
    pub label: String,
    pub installed: bool,
    /// `None` when not installed or launchctl could not be queried
    pub running: Option<bool>,
}

/// Modern and legacy daemons side by side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaemonStatus {
    pub modern: DaemonState,
    pub legacy: DaemonState,
}

impl DaemonStatus {
    /// Both generations installed at once, which should not happen
    pub fn both_installed(&self) -> bool {
        self.modern.installed && self.legacy.installed
    }

    pub fn summary(&self) -> String {
        let describe = |generation: &str, state: &DaemonState| {
            let running = match state.running {
                Some(true) => "running",
                Some(false) => "not running",
                None => "state unknown",
            };
            format!("{generation} daemon {} ({running})", state.label)
        };

        match (self.modern.installed, self.legacy.installed) {
            (true, true) => format!(
                "{}; {} (both generations installed)",
                describe("modern", &self.modern),
                describe("legacy", &self.legacy)
            ),
            (true, false) => describe("modern", &self.modern),
            (false, true) => describe("legacy", &self.legacy),
            (false, false) => "not installed".to_string(),
        }
    }
}

/// Whether the login-window agent is wired into the system login sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum AuthChainStatus {
    Configured,
    NotConfigured,
    Unknown(String),
}

impl AuthChainStatus {
    pub fn summary(&self) -> String {
        match self {
            AuthChainStatus::Configured => "configured".to_string(),
            AuthChainStatus::NotConfigured => "not configured (macOS login window)".to_string(),
            AuthChainStatus::Unknown(reason) => format!("unable to determine ({reason})"),
        }
    }
}

/// Kerberos credential cache state for the invoking user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum TicketStatus {
    Present,
    Missing,
    Unknown(String),
}

impl TicketStatus {
    pub fn summary(&self) -> String {
        match self {
            TicketStatus::Present => "tickets present".to_string(),
            TicketStatus::Missing => "no tickets".to_string(),
            TicketStatus::Unknown(reason) => format!("unable to determine ({reason})"),
        }
    }
}

/// Presence from the plist under the configured root, running state from launchctl
pub fn check_daemon(settings: &Settings, runner: &dyn CommandRunner, daemon: &DaemonSpec) -> DaemonState {
    let installed = settings.resolve(&daemon.plist).is_file();
    let running = if installed {
        let target = format!("system/{}", daemon.label);
        match runner.run("launchctl", &["print", &target]) {
            Ok(output) => Some(output.success),
            Err(e) => {
                tracing::warn!(label = %daemon.label, error = %e, "launchctl unavailable");
                None
            }
        }
    } else {
        None
    };

    DaemonState {
        label: daemon.label.clone(),
        installed,
        running,
    }
}

pub fn check_daemons(settings: &Settings, runner: &dyn CommandRunner) -> DaemonStatus {
    DaemonStatus {
        modern: check_daemon(settings, runner, &settings.daemons.modern),
        legacy: check_daemon(settings, runner, &settings.daemons.legacy),
    }
}

/// Look for the agent's mechanism in the `system.login.console` right
pub fn check_auth_chain(settings: &Settings, runner: &dyn CommandRunner) -> AuthChainStatus {
    match runner.run(
        "security",
        &["authorizationdb", "read", "system.login.console"],
    ) {
        Ok(output) if output.success => {
            if output.stdout.contains(&settings.auth_mechanism) {
                AuthChainStatus::Configured
            } else {
                AuthChainStatus::NotConfigured
            }
        }
        Ok(_) => AuthChainStatus::Unknown("authorization database could not be read".to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "security utility unavailable");
            AuthChainStatus::Unknown(e.to_string())
        }
    }
}

/// `klist -s` exits non-zero when the cache is empty or expired
pub fn check_tickets(runner: &dyn CommandRunner) -> TicketStatus {
    match runner.run("klist", &["-s"]) {
        Ok(output) if output.success => TicketStatus::Present,
        Ok(_) => TicketStatus::Missing,
        Err(e) => {
            tracing::warn!(error = %e, "klist unavailable");
            TicketStatus::Unknown(e.to_string())
        }
    }
}
