//! Filesystem probe for installed bundle versions
//!
//! Absence of an installation is the common case and never an error. A
//! metadata file that exists but cannot be read is reported separately as
//! [`ProbeOutcome::ReadError`] so callers can say "unable to determine"
//! instead of "not installed".

pub mod metadata;

pub use metadata::read_version_field;

use serde::Serialize;

use crate::config::Settings;
use crate::domain::Location;
use crate::version::Version;

/// Outcome of reading the version of one candidate location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// No artifact installed, or the version field is missing or blank
    Absent,
    /// Metadata exists but could not be read or parsed
    ReadError(String),
    Found(Version),
}

impl ProbeOutcome {
    pub fn version(&self) -> Option<&Version> {
        match self {
            ProbeOutcome::Found(version) => Some(version),
            _ => None,
        }
    }
}

/// Anything that can report the installed version at a location
pub trait VersionSource {
    fn probe(&self, location: Location) -> ProbeOutcome;
}

/// Reads bundle metadata from disk under the configured root. No caching.
pub struct BundleProbe<'a> {
    settings: &'a Settings,
}

impl<'a> BundleProbe<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }
}

impl VersionSource for BundleProbe<'_> {
    fn probe(&self, location: Location) -> ProbeOutcome {
        let path = self.settings.metadata_path(location);
        let outcome = read_version_field(&path, &self.settings.layout.version_key);

        match &outcome {
            ProbeOutcome::ReadError(cause) => {
                tracing::warn!(%location, path = %path.display(), %cause, "could not read bundle metadata");
            }
            _ => {
                tracing::debug!(%location, path = %path.display(), ?outcome, "probed");
            }
        }

        outcome
    }
}
