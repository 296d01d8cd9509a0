//! Well-known install locations of the connect agent
//!
//! All paths are absolute as they appear on a live machine. They are
//! re-rooted under [`Settings::root`](super::Settings::root) before use.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::Location;

/// Metadata key holding the marketing version of a bundle
pub const VERSION_KEY: &str = "CFBundleShortVersionString";

/// Authorization mechanism prefix written into the login sequence by the login-window agent
pub const AUTH_MECHANISM: &str = "JamfConnectLogin:";

/// Metadata file paths probed for each [`Location`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    /// Agent embedded in the companion launcher app
    pub modern_bundled: PathBuf,
    /// Stand-alone application
    pub legacy_app: PathBuf,
    /// Login-window plug-in bundle
    pub login_bundle: PathBuf,
    /// Key read from each metadata file
    pub version_key: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            modern_bundled: PathBuf::from(
                "/Applications/Self Service+.app/Contents/MacOS/Jamf Connect.app/Contents/Info.plist",
            ),
            legacy_app: PathBuf::from("/Applications/Jamf Connect.app/Contents/Info.plist"),
            login_bundle: PathBuf::from(
                "/Library/Security/SecurityAgentPlugins/JamfConnectLogin.bundle/Contents/Info.plist",
            ),
            version_key: VERSION_KEY.to_string(),
        }
    }
}

impl Layout {
    /// Metadata file for a location, before re-rooting
    pub fn metadata_path(&self, location: Location) -> &PathBuf {
        match location {
            Location::ModernBundled => &self.modern_bundled,
            Location::LegacyApp => &self.legacy_app,
            Location::LoginBundle => &self.login_bundle,
        }
    }
}

/// A launchd daemon identified by label and plist path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DaemonSpec {
    pub label: String,
    pub plist: PathBuf,
}

/// Modern and legacy daemons. Only one is expected on a given machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DaemonLayout {
    pub modern: DaemonSpec,
    pub legacy: DaemonSpec,
}

impl Default for DaemonLayout {
    fn default() -> Self {
        Self {
            modern: DaemonSpec {
                label: "com.jamf.connect.daemon.ssp".to_string(),
                plist: PathBuf::from("/Library/LaunchDaemons/com.jamf.connect.daemon.ssp.plist"),
            },
            legacy: DaemonSpec {
                label: "com.jamf.connect.daemon".to_string(),
                plist: PathBuf::from("/Library/LaunchDaemons/com.jamf.connect.daemon.plist"),
            },
        }
    }
}
