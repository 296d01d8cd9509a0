//! Optional YAML configuration file
//!
//! ```yaml
//! threshold: "2.45.1"
//! root: /Volumes/Macintosh HD
//! layout:
//!   legacy_app: /Applications/Jamf Connect.app/Contents/Info.plist
//! daemons:
//!   legacy:
//!     label: com.jamf.connect.daemon
//!     plist: /Library/LaunchDaemons/com.jamf.connect.daemon.plist
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::layout::{DaemonLayout, Layout};
use crate::error::{DoctorError, Result};

/// File name looked up under the user's configuration directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Parsed configuration file. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub threshold: Option<String>,
    pub root: Option<PathBuf>,
    pub layout: Option<Layout>,
    pub daemons: Option<DaemonLayout>,
    pub auth_mechanism: Option<String>,
}

impl ConfigFile {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from a file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DoctorError::ConfigNotFound {
                    path: path.display().to_string(),
                }
            } else {
                DoctorError::ConfigReadFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        serde_yaml::from_str(&content).map_err(|e| DoctorError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// `<config_dir>/connect-doctor/config.yaml`, if a config directory is known
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(env!("CARGO_PKG_NAME")).join(CONFIG_FILE_NAME))
}
