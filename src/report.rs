//! Check report emitted by the CLI.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::Rejection;
use crate::name::validate_snapshot_name_with;
use crate::paths::snapshot_path;
use crate::separators::{Platform, SeparatorSet};

/// Tool version emitted in reports.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Outcome for a single snapshot name.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NameCheck {
    pub name: String,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Rejection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Aggregate report for one invocation.
#[derive(Serialize, Debug, Clone)]
pub struct CheckReport {
    pub tool_version: String,
    pub platform: Platform,
    pub separators: SeparatorSet,
    pub checks: Vec<NameCheck>,
}

impl CheckReport {
    pub fn all_accepted(&self) -> bool {
        self.checks.iter().all(|check| check.accepted)
    }

    pub fn rejected(&self) -> impl Iterator<Item = &NameCheck> {
        self.checks.iter().filter(|check| !check.accepted)
    }
}

/// Check every name, recording the joined path for accepted names when `base` is given.
pub fn check_names<S: AsRef<str>>(
    config: &Config,
    names: &[S],
    base: Option<&Path>,
) -> CheckReport {
    let checks = names
        .iter()
        .map(|name| check_name(&config.separators, name.as_ref(), base))
        .collect();
    CheckReport {
        tool_version: TOOL_VERSION.to_string(),
        platform: config.platform,
        separators: config.separators,
        checks,
    }
}

fn check_name(separators: &SeparatorSet, name: &str, base: Option<&Path>) -> NameCheck {
    let outcome = match base {
        Some(base) => snapshot_path(base, name, separators).map(Some),
        None => validate_snapshot_name_with(name, separators).map(|_| None),
    };
    match outcome {
        Ok(path) => NameCheck {
            name: name.to_string(),
            accepted: true,
            reason: None,
            message: None,
            path: path.map(|path| path.display().to_string()),
        },
        Err(err) => NameCheck {
            name: name.to_string(),
            accepted: false,
            reason: Some(err.reason()),
            message: Some(err.to_string()),
            path: None,
        },
    }
}

/// Serialize the report as pretty JSON.
pub fn render(report: &CheckReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialize check report")
}

/// Write the report to `path`.
pub fn write_report(path: &Path, report: &CheckReport) -> Result<()> {
    let json = render(report)?;
    fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    Ok(())
}
