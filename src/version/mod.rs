//! Version strings and generation classification
//!
//! - [`compare`]: segment-wise ordering of dotted version strings
//! - [`classify`]: mapping a version to its [`Classification`] against the threshold

pub mod classify;
pub mod compare;

pub use classify::{Classification, DEFAULT_THRESHOLD, classify, default_threshold};
pub use compare::{compare_versions, is_greater_than};

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A version read from bundle metadata.
///
/// Never empty: an empty or whitespace-only value is absence, not a version.
/// Equality follows [`compare_versions`], so `2.45.1` and `2.45.1.0` are equal.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    /// Parse a raw metadata value, returning `None` when it is blank
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        compare_versions(&self.0, &other.0) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_versions(&self.0, &other.0)
    }
}
