//! Snapshot path resolution under a trusted storage directory.

use std::path::{Component, Path, PathBuf};

use crate::error::SnapshotNameError;
use crate::name::validate_snapshot_name_with;
use crate::separators::SeparatorSet;

/// Validate `name` and join it onto `base`.
///
/// The join is performed by the host's `Path`, so the name must also pass the
/// host separators whatever set the caller supplies. Callers must abort the
/// snapshot operation on error; the name is never rewritten into something
/// acceptable.
pub fn snapshot_path(
    base: &Path,
    name: &str,
    separators: &SeparatorSet,
) -> Result<PathBuf, SnapshotNameError> {
    let name = validate_snapshot_name_with(name, separators)?;
    let host = SeparatorSet::host();
    if *separators != host {
        validate_snapshot_name_with(name, &host)?;
    }
    Ok(base.join(name))
}

/// Lexically check that `path` is `base` followed only by normal components.
pub fn is_contained(base: &Path, path: &Path) -> bool {
    let Ok(rest) = path.strip_prefix(base) else {
        return false;
    };
    let mut components = rest.components().peekable();
    if components.peek().is_none() {
        return false;
    }
    components.all(|comp| matches!(comp, Component::Normal(_)))
}
