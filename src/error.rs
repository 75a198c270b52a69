//! Error types for snapshot name validation.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a snapshot name was refused.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    Empty,
    NulByte,
    /// Leading separator or drive prefix.
    AbsolutePath,
    /// A `..` segment anywhere in the name.
    TraversalSegment,
    CurrentDir,
    ContainsSeparator,
}

impl Rejection {
    /// Stable machine-readable code, matching the serialized form.
    pub fn code(self) -> &'static str {
        match self {
            Rejection::Empty => "empty",
            Rejection::NulByte => "nul_byte",
            Rejection::AbsolutePath => "absolute_path",
            Rejection::TraversalSegment => "traversal_segment",
            Rejection::CurrentDir => "current_dir",
            Rejection::ContainsSeparator => "contains_separator",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Rejection::Empty => "name is empty",
            Rejection::NulByte => "name contains a NUL byte",
            Rejection::AbsolutePath => "name looks like an absolute path",
            Rejection::TraversalSegment => "name contains a `..` path segment",
            Rejection::CurrentDir => "name refers to the current directory",
            Rejection::ContainsSeparator => "name contains a path separator",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A snapshot name that cannot be used as a storage path segment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid snapshot name {name:?}: {reason}")]
pub struct SnapshotNameError {
    name: String,
    reason: Rejection,
}

impl SnapshotNameError {
    pub(crate) fn new(name: &str, reason: Rejection) -> Self {
        Self {
            name: name.to_string(),
            reason,
        }
    }

    /// The rejected name, verbatim.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reason(&self) -> Rejection {
        self.reason
    }
}
