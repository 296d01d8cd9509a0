//! Component and install-location domain types

use serde::Serialize;
use std::fmt;

use crate::probe::ProbeOutcome;

/// The two logical components of the connect agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Menu-bar app handling SSO, Kerberos and privilege elevation
    MenuBarAgent,
    /// Authorization plug-in driving the login window
    LoginWindowAgent,
}

impl ComponentKind {
    /// Candidate locations in the order the resolver consults them
    pub fn candidates(self) -> &'static [Location] {
        match self {
            ComponentKind::MenuBarAgent => &[Location::ModernBundled, Location::LegacyApp],
            ComponentKind::LoginWindowAgent => &[Location::LoginBundle, Location::LegacyApp],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ComponentKind::MenuBarAgent => "Menu bar agent",
            ComponentKind::LoginWindowAgent => "Login window agent",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Logical tag for a well-known install location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    /// Agent embedded in the companion launcher app
    ModernBundled,
    /// Stand-alone application path, shared by both components
    LegacyApp,
    /// Dedicated login-window plug-in bundle
    LoginBundle,
}

impl Location {
    pub fn description(self) -> &'static str {
        match self {
            Location::ModernBundled => "companion app path",
            Location::LegacyApp => "legacy app path",
            Location::LoginBundle => "login bundle path",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Result of probing one location, built fresh on every run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallCandidate {
    pub location: Location,
    pub outcome: ProbeOutcome,
}

impl InstallCandidate {
    pub fn new(location: Location, outcome: ProbeOutcome) -> Self {
        Self { location, outcome }
    }
}
