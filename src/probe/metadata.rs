//! Single read primitive: one string field from one property list

use std::io::{Cursor, ErrorKind};
use std::path::Path;

use super::ProbeOutcome;
use crate::version::Version;

/// Read string field `key` from the property list at `path`.
///
/// Both XML and binary property lists are accepted.
pub fn read_version_field(path: &Path, key: &str) -> ProbeOutcome {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            return ProbeOutcome::Absent;
        }
        Err(e) => return ProbeOutcome::ReadError(e.to_string()),
    };

    let value = match plist::Value::from_reader(Cursor::new(bytes)) {
        Ok(value) => value,
        Err(e) => return ProbeOutcome::ReadError(format!("invalid property list: {e}")),
    };

    value
        .as_dictionary()
        .and_then(|dict| dict.get(key))
        .and_then(plist::Value::as_string)
        .and_then(Version::parse)
        .map_or(ProbeOutcome::Absent, ProbeOutcome::Found)
}
