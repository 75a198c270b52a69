//! Snapshot name validation for snapshot-testing harnesses.
//!
//! A harness stores each snapshot as a file named after an identifier chosen
//! by the test author. [`validate_snapshot_name`] must run before that
//! identifier is joined onto the snapshot directory; [`snapshot_path`] does
//! both steps at once.

pub mod config;
pub mod error;
pub mod name;
pub mod paths;
pub mod report;
pub mod separators;

pub use error::{Rejection, SnapshotNameError};
pub use name::{validate_snapshot_name, validate_snapshot_name_with, SnapshotName};
pub use paths::{is_contained, snapshot_path};
pub use separators::{Platform, SeparatorSet};
