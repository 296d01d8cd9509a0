//! Menu-bar agent resolution
//!
//! The legacy app path is ambiguous: administrators sometimes leave a modern
//! build there, so whatever is found at that path is split by classification
//! before priorities are applied.

use super::{Conflict, Primary, ResolvedStatus};
use crate::domain::{ComponentKind, Location};
use crate::probe::VersionSource;
use crate::version::{Classification, Version, classify};

/// Versions found for the menu-bar agent, split by what they represent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuBarFindings {
    /// Modern build at the companion-app path
    pub integrated: Option<Version>,
    /// Modern build at the legacy app path
    pub modern_at_legacy: Option<Version>,
    /// Legacy build at the legacy app path
    pub classic: Option<Version>,
}

impl MenuBarFindings {
    /// Pick the primary by priority and collect advisory conflicts.
    ///
    /// Priority: companion-app build, then modern build at the legacy path,
    /// then classic build. The primary is never repeated as a conflict.
    pub fn decide(&self) -> (Option<Primary>, Vec<Conflict>) {
        let primary = if let Some(version) = &self.integrated {
            Primary::new(Location::ModernBundled, version.clone(), Classification::Modern)
        } else if let Some(version) = &self.modern_at_legacy {
            Primary::new(Location::LegacyApp, version.clone(), Classification::Modern)
        } else if let Some(version) = &self.classic {
            Primary::new(Location::LegacyApp, version.clone(), Classification::Legacy)
        } else {
            return (None, Vec::new());
        };

        let mut conflicts = Vec::new();

        // A classic build next to any modern build is always a leftover.
        if let Some(classic) = &self.classic {
            if self.integrated.is_some() || self.modern_at_legacy.is_some() {
                conflicts.push(Conflict::ClassicAtLegacyPath {
                    version: classic.clone(),
                });
            }
        }

        // Same modern version at both paths is expected redundancy.
        if let (Some(integrated), Some(legacy)) = (&self.integrated, &self.modern_at_legacy) {
            if integrated != legacy {
                conflicts.push(Conflict::ModernAtLegacyPath {
                    version: legacy.clone(),
                });
            }
        }

        (Some(primary), conflicts)
    }
}

/// Resolve the menu-bar agent from the companion-app and legacy paths
pub fn resolve_menu_bar_status(source: &dyn VersionSource, threshold: &Version) -> ResolvedStatus {
    let mut status = ResolvedStatus::empty(ComponentKind::MenuBarAgent);

    let integrated = status.probe(source, Location::ModernBundled);
    let at_legacy = status.probe(source, Location::LegacyApp);

    let mut findings = MenuBarFindings {
        integrated,
        ..MenuBarFindings::default()
    };
    if let Some(version) = at_legacy {
        match classify(&version, threshold) {
            Classification::Legacy => findings.classic = Some(version),
            Classification::Modern => findings.modern_at_legacy = Some(version),
        }
    }

    let (primary, conflicts) = findings.decide();
    tracing::debug!(?findings, ?primary, conflicts = conflicts.len(), "resolved menu bar agent");

    status.primary = primary;
    status.conflicts = conflicts;
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeOutcome;
    use crate::test_fixtures::RecordingSource;
    use crate::version::default_threshold;

    fn v(raw: &str) -> Version {
        Version::parse(raw).unwrap()
    }

    fn resolve(source: &RecordingSource) -> ResolvedStatus {
        resolve_menu_bar_status(source, &default_threshold())
    }

    #[test]
    fn test_total_absence() {
        let source = RecordingSource::new();
        let status = resolve(&source);
        assert!(status.primary.is_none());
        assert!(status.conflicts.is_empty());
        assert_eq!(status.status_line(), "not detected");
    }

    #[test]
    fn test_modern_only() {
        let source = RecordingSource::new().with(Location::ModernBundled, "3.2.0");
        let status = resolve(&source);
        let primary = status.primary.as_ref().unwrap();
        assert_eq!(primary.location, Location::ModernBundled);
        assert_eq!(primary.classification, Classification::Modern);
        assert!(status.conflicts.is_empty());
        assert_eq!(status.status_line(), "Self Service+ Modern 3.2.0");
    }

    #[test]
    fn test_classic_only() {
        let source = RecordingSource::new().with(Location::LegacyApp, "2.40.0");
        let status = resolve(&source);
        let primary = status.primary.as_ref().unwrap();
        assert_eq!(primary.location, Location::LegacyApp);
        assert_eq!(primary.classification, Classification::Legacy);
        assert_eq!(status.status_line(), "Classic Legacy 2.40.0");
    }

    #[test]
    fn test_modern_at_legacy_path_only() {
        let source = RecordingSource::new().with(Location::LegacyApp, "3.0.0");
        let status = resolve(&source);
        let primary = status.primary.as_ref().unwrap();
        assert_eq!(primary.location, Location::LegacyApp);
        assert_eq!(primary.classification, Classification::Modern);
        assert!(status.conflicts.is_empty());
        assert_eq!(status.status_line(), "Stand-alone Modern 3.0.0");
    }

    #[test]
    fn test_modern_beats_classic_and_reports_conflict() {
        let source = RecordingSource::new()
            .with(Location::ModernBundled, "3.0.0")
            .with(Location::LegacyApp, "2.40.0");
        let status = resolve(&source);

        let primary = status.primary.as_ref().unwrap();
        assert_eq!(primary.version, v("3.0.0"));
        assert_eq!(primary.classification, Classification::Modern);
        assert_eq!(
            status.conflicts,
            vec![Conflict::ClassicAtLegacyPath { version: v("2.40.0") }]
        );
        assert!(status.status_line().contains("Modern 3.0.0"));
        assert!(status.status_line().contains("classic build at legacy path, version 2.40.0"));
    }

    #[test]
    fn test_threshold_build_at_legacy_path_is_classic() {
        let source = RecordingSource::new()
            .with(Location::ModernBundled, "3.0.0")
            .with(Location::LegacyApp, "2.45.1");
        let status = resolve(&source);
        assert_eq!(
            status.conflicts,
            vec![Conflict::ClassicAtLegacyPath { version: v("2.45.1") }]
        );
    }

    #[test]
    fn test_same_modern_version_is_benign() {
        let source = RecordingSource::new()
            .with(Location::ModernBundled, "3.0.0")
            .with(Location::LegacyApp, "3.0.0");
        let status = resolve(&source);
        assert!(status.conflicts.is_empty());
        assert_eq!(status.status_line(), "Self Service+ Modern 3.0.0");
    }

    #[test]
    fn test_padded_equal_modern_version_is_benign() {
        let source = RecordingSource::new()
            .with(Location::ModernBundled, "3.0")
            .with(Location::LegacyApp, "3.0.0");
        assert!(resolve(&source).conflicts.is_empty());
    }

    #[test]
    fn test_different_modern_versions_are_flagged() {
        let source = RecordingSource::new()
            .with(Location::ModernBundled, "3.0.0")
            .with(Location::LegacyApp, "3.1.0");
        let status = resolve(&source);

        assert_eq!(status.primary.as_ref().unwrap().version, v("3.0.0"));
        assert_eq!(
            status.conflicts,
            vec![Conflict::ModernAtLegacyPath { version: v("3.1.0") }]
        );
        assert!(status.status_line().contains("modern build at legacy path, version 3.1.0"));
    }

    #[test]
    fn test_modern_at_legacy_with_classic_reports_conflict() {
        let findings = MenuBarFindings {
            integrated: None,
            modern_at_legacy: Some(v("3.0.0")),
            classic: Some(v("2.40.0")),
        };
        let (primary, conflicts) = findings.decide();
        let primary = primary.unwrap();
        assert_eq!(primary.location, Location::LegacyApp);
        assert_eq!(primary.version, v("3.0.0"));
        assert_eq!(
            conflicts,
            vec![Conflict::ClassicAtLegacyPath { version: v("2.40.0") }]
        );
    }

    #[test]
    fn test_all_three_findings() {
        let findings = MenuBarFindings {
            integrated: Some(v("3.2.0")),
            modern_at_legacy: Some(v("3.1.0")),
            classic: Some(v("2.40.0")),
        };
        let (primary, conflicts) = findings.decide();
        assert_eq!(primary.unwrap().location, Location::ModernBundled);
        assert_eq!(
            conflicts,
            vec![
                Conflict::ClassicAtLegacyPath { version: v("2.40.0") },
                Conflict::ModernAtLegacyPath { version: v("3.1.0") },
            ]
        );
    }

    #[test]
    fn test_primary_never_in_conflicts() {
        let versions = [None, Some("2.40.0"), Some("3.0.0"), Some("3.1.0")];
        for integrated in versions {
            for modern_at_legacy in versions {
                for classic in versions {
                    let findings = MenuBarFindings {
                        integrated: integrated.map(v),
                        modern_at_legacy: modern_at_legacy.map(v),
                        classic: classic.map(v),
                    };
                    let (primary, conflicts) = findings.decide();
                    let Some(primary) = primary else {
                        assert!(conflicts.is_empty());
                        continue;
                    };
                    for conflict in &conflicts {
                        let same_slot = match conflict {
                            Conflict::ClassicAtLegacyPath { .. } => {
                                primary.classification == Classification::Legacy
                            }
                            Conflict::ModernAtLegacyPath { .. } => {
                                primary.location == Location::LegacyApp
                            }
                        };
                        assert!(!same_slot, "primary {primary:?} repeated in {conflicts:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_probes_both_locations_in_order() {
        let source = RecordingSource::new();
        let status = resolve(&source);
        assert_eq!(
            source.probed(),
            vec![Location::ModernBundled, Location::LegacyApp]
        );
        assert_eq!(status.candidates.len(), 2);
    }

    #[test]
    fn test_unreadable_legacy_path_keeps_primary() {
        let source = RecordingSource::new()
            .with(Location::ModernBundled, "3.2.0")
            .with_outcome(
                Location::LegacyApp,
                ProbeOutcome::ReadError("Permission denied".to_string()),
            );
        let status = resolve(&source);
        assert_eq!(status.primary.as_ref().unwrap().version, v("3.2.0"));
        assert_eq!(
            status.status_line(),
            "Self Service+ Modern 3.2.0 (could not read legacy app path: Permission denied)"
        );
    }

    #[test]
    fn test_everything_unreadable() {
        let source = RecordingSource::new()
            .with_outcome(
                Location::ModernBundled,
                ProbeOutcome::ReadError("I/O error".to_string()),
            )
            .with_outcome(
                Location::LegacyApp,
                ProbeOutcome::ReadError("I/O error".to_string()),
            );
        let status = resolve(&source);
        assert!(status.primary.is_none());
        assert_eq!(status.unreadable.len(), 2);
        assert!(status.status_line().starts_with("unable to determine"));
    }

    #[test]
    fn test_custom_threshold_moves_classification() {
        let source = RecordingSource::new().with(Location::LegacyApp, "3.0.0");
        let status = resolve_menu_bar_status(&source, &v("3.5"));
        assert_eq!(
            status.primary.unwrap().classification,
            Classification::Legacy
        );
    }
}
