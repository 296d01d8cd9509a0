//! Segment-wise comparison of dotted version strings
//!
//! Input comes from bundle metadata written by the vendor's installer, so the
//! comparison is permissive rather than strict: a segment that is not purely
//! numeric is compared as text instead of being rejected.

use std::cmp::Ordering;

/// Compare two version strings.
///
/// An empty string sorts before any non-empty one. Missing trailing segments
/// count as `0`, so `"2.45.1"` and `"2.45.1.0"` are equal.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.trim(), b.trim());

    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }

    let left: Vec<&str> = a.split('.').collect();
    let right: Vec<&str> = b.split('.').collect();
    let len = left.len().max(right.len());

    for idx in 0..len {
        let l = left.get(idx).copied().unwrap_or("0");
        let r = right.get(idx).copied().unwrap_or("0");
        let ordering = compare_segment(l, r);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

/// `true` when `a` is strictly newer than `b`
pub fn is_greater_than(a: &str, b: &str) -> bool {
    compare_versions(a, b) == Ordering::Greater
}

fn compare_segment(left: &str, right: &str) -> Ordering {
    let left = if left.is_empty() { "0" } else { left };
    let right = if right.is_empty() { "0" } else { right };

    if is_numeric(left) && is_numeric(right) {
        compare_numeric(left, right)
    } else {
        left.cmp(right)
    }
}

fn is_numeric(segment: &str) -> bool {
    segment.bytes().all(|b| b.is_ascii_digit())
}

// Digit strings of any length, without parsing into a fixed-width integer.
fn compare_numeric(left: &str, right: &str) -> Ordering {
    let left = left.trim_start_matches('0');
    let right = right.trim_start_matches('0');
    left.len()
        .cmp(&right.len())
        .then_with(|| left.cmp(right))
}
