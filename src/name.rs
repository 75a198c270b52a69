//! Snapshot name validation.
//!
//! A snapshot name must be a single flat path segment: it is joined directly
//! onto the snapshot directory, so anything that could steer the join outside
//! that directory is refused rather than cleaned up.

use std::fmt;
use std::ops::Deref;

use crate::error::{Rejection, SnapshotNameError};
use crate::separators::SeparatorSet;

const PARENT_DIR: &str = "..";
const CURRENT_DIR: &str = ".";

/// Validate `name` against the host platform's separators.
pub fn validate_snapshot_name(name: &str) -> Result<&str, SnapshotNameError> {
    validate_snapshot_name_with(name, &SeparatorSet::host())
}

/// Validate `name` against an explicit separator set and return it unchanged.
pub fn validate_snapshot_name_with<'a>(
    name: &'a str,
    separators: &SeparatorSet,
) -> Result<&'a str, SnapshotNameError> {
    match check(name, separators) {
        None => Ok(name),
        Some(reason) => {
            tracing::debug!(name, reason = reason.code(), "rejected snapshot name");
            Err(SnapshotNameError::new(name, reason))
        }
    }
}

fn check(name: &str, separators: &SeparatorSet) -> Option<Rejection> {
    if name.is_empty() {
        return Some(Rejection::Empty);
    }
    if name.contains('\0') {
        return Some(Rejection::NulByte);
    }
    if name.starts_with(|ch: char| separators.is_separator(ch)) {
        return Some(Rejection::AbsolutePath);
    }
    if separators.drive_prefixes() && has_drive_prefix(name) {
        return Some(Rejection::AbsolutePath);
    }
    if name
        .split(|ch: char| separators.is_separator(ch))
        .any(|segment| segment == PARENT_DIR)
    {
        return Some(Rejection::TraversalSegment);
    }
    if name.contains(|ch: char| separators.is_separator(ch)) {
        return Some(Rejection::ContainsSeparator);
    }
    if name == CURRENT_DIR {
        return Some(Rejection::CurrentDir);
    }
    None
}

fn has_drive_prefix(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// A snapshot name that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnapshotName(String);

impl SnapshotName {
    /// Validate against the host separators and wrap.
    pub fn new(name: &str) -> Result<Self, SnapshotNameError> {
        Self::with_separators(name, &SeparatorSet::host())
    }

    pub fn with_separators(
        name: &str,
        separators: &SeparatorSet,
    ) -> Result<Self, SnapshotNameError> {
        validate_snapshot_name_with(name, separators).map(|name| Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for SnapshotName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for SnapshotName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SnapshotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
