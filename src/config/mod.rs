//! Runtime settings for a diagnostic run
//!
//! Precedence, highest first: command-line flag, environment variable (both
//! handled by clap), YAML configuration file, built-in defaults.

pub mod file;
pub mod layout;

pub use file::{ConfigFile, default_config_path};
pub use layout::{AUTH_MECHANISM, DaemonLayout, DaemonSpec, Layout, VERSION_KEY};

use std::path::{Path, PathBuf};

use crate::domain::Location;
use crate::error::{DoctorError, Result};
use crate::version::{Version, default_threshold};

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub threshold: Option<String>,
}

/// Fully resolved settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Filesystem prefix every well-known path is resolved under
    pub root: PathBuf,
    pub threshold: Version,
    pub layout: Layout,
    pub daemons: DaemonLayout,
    pub auth_mechanism: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/"),
            threshold: default_threshold(),
            layout: Layout::default(),
            daemons: DaemonLayout::default(),
            auth_mechanism: AUTH_MECHANISM.to_string(),
        }
    }
}

impl Settings {
    /// Load settings, reading the explicit config file or the default one when present
    pub fn load(overrides: &Overrides) -> Result<Self> {
        let file = match &overrides.config {
            Some(path) => ConfigFile::load(path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => {
                    tracing::debug!(path = %path.display(), "using default config file");
                    ConfigFile::load(&path)?
                }
                _ => ConfigFile::default(),
            },
        };

        Self::from_parts(file, overrides)
    }

    /// Merge a parsed config file with overrides
    pub fn from_parts(file: ConfigFile, overrides: &Overrides) -> Result<Self> {
        let defaults = Self::default();

        let threshold = match overrides.threshold.as_ref().or(file.threshold.as_ref()) {
            Some(raw) => parse_threshold(raw)?,
            None => defaults.threshold,
        };

        let root = overrides
            .root
            .clone()
            .or(file.root)
            .unwrap_or(defaults.root);
        if !root.is_dir() {
            return Err(DoctorError::InvalidRoot {
                path: root.display().to_string(),
            });
        }

        Ok(Self {
            root,
            threshold,
            layout: file.layout.unwrap_or(defaults.layout),
            daemons: file.daemons.unwrap_or(defaults.daemons),
            auth_mechanism: file.auth_mechanism.unwrap_or(defaults.auth_mechanism),
        })
    }

    /// Re-root an absolute machine path under [`Settings::root`]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match path.strip_prefix("/") {
            Ok(relative) => self.root.join(relative),
            Err(_) => self.root.join(path),
        }
    }

    /// Metadata file to probe for a location
    pub fn metadata_path(&self, location: Location) -> PathBuf {
        self.resolve(self.layout.metadata_path(location))
    }
}

/// Parse a threshold supplied by the user
pub fn parse_threshold(raw: &str) -> Result<Version> {
    let version = Version::parse(raw).ok_or_else(|| DoctorError::InvalidThreshold {
        value: raw.to_string(),
    })?;
    if !version.as_str().bytes().any(|b| b.is_ascii_digit()) {
        return Err(DoctorError::InvalidThreshold {
            value: raw.to_string(),
        });
    }
    Ok(version)
}
