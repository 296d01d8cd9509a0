//! Login-window agent resolution
//!
//! The dedicated plug-in bundle only exists from the modern generation on,
//! so a version there is trusted outright. The legacy app path is shared with
//! the menu-bar agent and only counts when it holds a legacy build, because
//! legacy deployments ship both components in that one app.

use super::{Note, Primary, ResolvedStatus};
use crate::domain::{ComponentKind, Location};
use crate::probe::VersionSource;
use crate::version::{Classification, Version, classify};

/// Resolve the login-window agent from the plug-in bundle and the legacy app path
pub fn resolve_login_window_status(
    source: &dyn VersionSource,
    threshold: &Version,
) -> ResolvedStatus {
    let mut status = ResolvedStatus::empty(ComponentKind::LoginWindowAgent);

    if let Some(version) = status.probe(source, Location::LoginBundle) {
        let classification = classify(&version, threshold);
        tracing::debug!(%version, %classification, "login bundle is authoritative");
        status.primary = Some(Primary::new(Location::LoginBundle, version, classification));
        return status;
    }

    if let Some(version) = status.probe(source, Location::LegacyApp) {
        match classify(&version, threshold) {
            Classification::Legacy => {
                status.primary = Some(Primary::new(
                    Location::LegacyApp,
                    version,
                    Classification::Legacy,
                ));
            }
            Classification::Modern => {
                tracing::debug!(%version, "modern menu-bar build at legacy path, not a login-window agent");
                status.note = Some(Note::ModernMenuBarAtLegacyPath { version });
            }
        }
    }

    status
}
