//! Status resolution for the connect agent's components
//!
//! Each component has a short, ordered list of candidate locations. The
//! resolver probes them, picks the primary installation by priority and
//! reports leftovers from other generations as advisory conflicts.
//!
//! - [`menu_bar`]: companion-app build vs. builds at the legacy app path
//! - [`login_window`]: dedicated plug-in bundle vs. the shared legacy app path

pub mod login_window;
pub mod menu_bar;

pub use login_window::resolve_login_window_status;
pub use menu_bar::resolve_menu_bar_status;

use serde::Serialize;
use std::fmt;

use crate::domain::{ComponentKind, InstallCandidate, Location};
use crate::probe::{ProbeOutcome, VersionSource};
use crate::version::{Classification, Version};

/// Resolve one component
pub fn resolve(kind: ComponentKind, source: &dyn VersionSource, threshold: &Version) -> ResolvedStatus {
    match kind {
        ComponentKind::MenuBarAgent => resolve_menu_bar_status(source, threshold),
        ComponentKind::LoginWindowAgent => resolve_login_window_status(source, threshold),
    }
}

/// The installation selected as authoritative for a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Primary {
    pub location: Location,
    pub version: Version,
    pub classification: Classification,
}

impl Primary {
    pub fn new(location: Location, version: Version, classification: Classification) -> Self {
        Self {
            location,
            version,
            classification,
        }
    }
}

/// A non-primary installation that should have been cleaned up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Conflict {
    /// Legacy build still sitting at the legacy app path
    ClassicAtLegacyPath { version: Version },
    /// Modern build at the legacy app path that differs from the primary
    ModernAtLegacyPath { version: Version },
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::ClassicAtLegacyPath { version } => {
                write!(f, "also found classic build at legacy path, version {version}")
            }
            Conflict::ModernAtLegacyPath { version } => {
                write!(f, "also found modern build at legacy path, version {version}")
            }
        }
    }
}

/// Why a component with a version on disk is still reported as not detected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Note {
    /// The shared legacy path holds a modern menu-bar build, not a login-window component
    ModernMenuBarAtLegacyPath { version: Version },
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Note::ModernMenuBarAtLegacyPath { .. } => {
                f.write_str("found modern menu-bar build at legacy path")
            }
        }
    }
}

/// Candidate whose metadata exists but could not be read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unreadable {
    pub location: Location,
    pub cause: String,
}

/// Resolution of all candidates for one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedStatus {
    pub kind: ComponentKind,
    pub primary: Option<Primary>,
    pub conflicts: Vec<Conflict>,
    pub note: Option<Note>,
    pub unreadable: Vec<Unreadable>,
    /// Every location probed, in order
    pub candidates: Vec<InstallCandidate>,
}

impl ResolvedStatus {
    fn empty(kind: ComponentKind) -> Self {
        Self {
            kind,
            primary: None,
            conflicts: Vec::new(),
            note: None,
            unreadable: Vec::new(),
            candidates: Vec::new(),
        }
    }

    /// Probe `location`, remembering the candidate and any read failure
    fn probe(&mut self, source: &dyn VersionSource, location: Location) -> Option<Version> {
        let outcome = source.probe(location);
        if let ProbeOutcome::ReadError(cause) = &outcome {
            self.unreadable.push(Unreadable {
                location,
                cause: cause.clone(),
            });
        }
        let version = outcome.version().cloned();
        self.candidates.push(InstallCandidate::new(location, outcome));
        version
    }

    pub fn is_detected(&self) -> bool {
        self.primary.is_some()
    }

    /// Display-ready status line; never fails
    pub fn status_line(&self) -> String {
        let mut line = match (&self.primary, &self.note) {
            (Some(primary), _) => {
                let mut line = format!(
                    "{} {} {}",
                    label(self.kind, primary.location, primary.classification),
                    primary.classification,
                    primary.version
                );
                for conflict in &self.conflicts {
                    line.push_str(&format!(" ({conflict})"));
                }
                line
            }
            (None, Some(note)) => format!("not detected ({note})"),
            (None, None) if !self.unreadable.is_empty() => "unable to determine".to_string(),
            (None, None) => "not detected".to_string(),
        };

        for unreadable in &self.unreadable {
            line.push_str(&format!(
                " (could not read {}: {})",
                unreadable.location, unreadable.cause
            ));
        }

        line
    }
}

impl fmt::Display for ResolvedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.status_line())
    }
}

/// Per-component wording for where the primary build lives
pub fn label(kind: ComponentKind, location: Location, classification: Classification) -> &'static str {
    match (kind, location, classification) {
        (ComponentKind::MenuBarAgent, Location::ModernBundled, _) => "Self Service+",
        (ComponentKind::MenuBarAgent, _, Classification::Modern) => "Stand-alone",
        (ComponentKind::LoginWindowAgent, Location::LoginBundle, _) => "Plug-in bundle",
        (_, _, Classification::Legacy) => "Classic",
        (ComponentKind::LoginWindowAgent, _, Classification::Modern) => "Stand-alone",
    }
}
