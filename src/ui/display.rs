//! Display functions for reports and status lines

use console::Style;
use std::fmt::Write;

use crate::probe::ProbeOutcome;
use crate::report::{AuthChainStatus, ComponentReport, DiagnosticReport, TicketStatus};
use crate::resolver::ResolvedStatus;
use crate::version::{Version, classify, compare_versions};

const LABEL_WIDTH: usize = 20;

fn label(text: &str) -> String {
    let padded = format!("{:<width$}", format!("{text}:"), width = LABEL_WIDTH);
    Style::new().bold().apply_to(padded).to_string()
}

/// Green when clean, yellow when something needs attention, dim when absent
fn status_style(status: &ResolvedStatus) -> Style {
    if !status.is_detected() {
        if status.note.is_some() || !status.unreadable.is_empty() {
            Style::new().yellow()
        } else {
            Style::new().dim()
        }
    } else if status.conflicts.is_empty() && status.unreadable.is_empty() {
        Style::new().green()
    } else {
        Style::new().yellow()
    }
}

fn outcome_text(outcome: &ProbeOutcome) -> String {
    match outcome {
        ProbeOutcome::Absent => "absent".to_string(),
        ProbeOutcome::ReadError(cause) => format!("unreadable ({cause})"),
        ProbeOutcome::Found(version) => format!("found {version}"),
    }
}

/// Every candidate of the component, including ones the resolver never consulted
fn write_candidates(out: &mut String, status: &ResolvedStatus) {
    for location in status.kind.candidates() {
        let text = status
            .candidates
            .iter()
            .find(|candidate| candidate.location == *location)
            .map_or_else(
                || "not consulted".to_string(),
                |candidate| outcome_text(&candidate.outcome),
            );
        let _ = writeln!(
            out,
            "      {} {}",
            Style::new().dim().apply_to(format!("{location}:")),
            text
        );
    }
}

/// One component as a single labelled line, plus probed locations when `detailed`
pub fn render_component(status: &ResolvedStatus, detailed: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {} {}",
        label(status.kind.title()),
        status_style(status).apply_to(status.status_line())
    );
    if detailed {
        write_candidates(&mut out, status);
    }
    out
}

fn render_component_report(out: &mut String, component: &ComponentReport, detailed: bool) {
    out.push_str(&render_component(&component.status, detailed));
}

/// Full report, one line per check
pub fn render_report(report: &DiagnosticReport, detailed: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}",
        Style::new().bold().cyan().apply_to("Connect agent diagnostics"),
        Style::new()
            .dim()
            .apply_to(format!("(threshold {})", report.threshold))
    );
    out.push('\n');

    render_component_report(&mut out, &report.menu_bar, detailed);
    render_component_report(&mut out, &report.login_window, detailed);

    let daemon_style = if report.daemon.both_installed() {
        Style::new().yellow()
    } else {
        Style::new()
    };
    let _ = writeln!(
        out,
        "  {} {}",
        label("Daemon"),
        daemon_style.apply_to(report.daemon.summary())
    );

    let auth_style = match report.auth_chain {
        AuthChainStatus::Configured => Style::new().green(),
        AuthChainStatus::NotConfigured => Style::new(),
        AuthChainStatus::Unknown(_) => Style::new().dim(),
    };
    let _ = writeln!(
        out,
        "  {} {}",
        label("Login auth chain"),
        auth_style.apply_to(report.auth_chain.summary())
    );

    let ticket_style = match report.tickets {
        TicketStatus::Present => Style::new().green(),
        TicketStatus::Missing => Style::new(),
        TicketStatus::Unknown(_) => Style::new().dim(),
    };
    let _ = writeln!(
        out,
        "  {} {}",
        label("Kerberos tickets"),
        ticket_style.apply_to(report.tickets.summary())
    );

    out
}

fn classification_text(raw: &str, threshold: &Version) -> String {
    match Version::parse(raw) {
        Some(version) => classify(&version, threshold).to_string(),
        None => "no version".to_string(),
    }
}

/// Ordering of two versions and where each falls against the threshold
pub fn render_comparison(left: &str, right: &str, threshold: &Version) -> String {
    let symbol = match compare_versions(left, right) {
        std::cmp::Ordering::Less => "<",
        std::cmp::Ordering::Equal => "=",
        std::cmp::Ordering::Greater => ">",
    };

    let mut out = String::new();
    let _ = writeln!(out, "{} {symbol} {}", left.trim(), right.trim());
    let _ = writeln!(
        out,
        "  {} {}",
        label(&format!("{} (vs {threshold})", display_raw(left))),
        classification_text(left, threshold)
    );
    let _ = writeln!(
        out,
        "  {} {}",
        label(&format!("{} (vs {threshold})", display_raw(right))),
        classification_text(right, threshold)
    );
    out
}

fn display_raw(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.is_empty() { "\"\"" } else { trimmed }
}
