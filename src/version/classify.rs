//! Legacy/modern generation classification

use serde::Serialize;
use std::fmt;

use super::{Version, is_greater_than};

/// Last release of the stand-alone generation. Anything newer ships with the companion app.
pub const DEFAULT_THRESHOLD: &str = "2.45.1";

/// [`DEFAULT_THRESHOLD`] as a [`Version`]
pub fn default_threshold() -> Version {
    Version(DEFAULT_THRESHOLD.to_string())
}

/// Generation of an installed build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Legacy,
    Modern,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Legacy => f.write_str("Legacy"),
            Classification::Modern => f.write_str("Modern"),
        }
    }
}

/// Modern iff `version` is strictly newer than `threshold`
pub fn classify(version: &Version, threshold: &Version) -> Classification {
    if is_greater_than(version.as_str(), threshold.as_str()) {
        Classification::Modern
    } else {
        Classification::Legacy
    }
}
