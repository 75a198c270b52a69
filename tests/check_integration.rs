use std::process::{Command, Output};

fn snapguard(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_snapguard"))
        .args(args)
        .env_remove("SNAPGUARD_PLATFORM")
        .env_remove("RUST_LOG")
        .output()
        .expect("run snapguard")
}

fn report_from(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("parse check report")
}

#[test]
fn accepts_flat_names_and_resolves_paths() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let base = temp_dir.path().join("snapshots");
    let base_arg = base.to_str().expect("utf-8 temp path");

    let output = snapguard(&["check", "valid_name", "result.json", "--base", base_arg]);
    assert!(output.status.success());

    let report = report_from(&output);
    let checks = report["checks"].as_array().expect("checks array");
    assert_eq!(checks.len(), 2);
    assert_eq!(checks[0]["name"], "valid_name");
    assert_eq!(checks[0]["accepted"], true);
    assert_eq!(
        checks[0]["path"].as_str(),
        Some(base.join("valid_name").to_str().expect("utf-8 path"))
    );
}

#[test]
fn rejects_traversal_names_with_reasons() {
    let output = snapguard(&[
        "check",
        "--platform",
        "posix",
        "../../../etc/passwd",
        "/etc/passwd",
        "subdir/file",
        "valid_name",
    ]);
    assert_eq!(output.status.code(), Some(1));

    let report = report_from(&output);
    assert_eq!(report["platform"], "posix");
    let reasons: Vec<_> = report["checks"]
        .as_array()
        .expect("checks array")
        .iter()
        .map(|check| check.get("reason").and_then(|value| value.as_str()))
        .collect();
    assert_eq!(
        reasons,
        vec![
            Some("traversal_segment"),
            Some("absolute_path"),
            Some("contains_separator"),
            None,
        ]
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("subdir/file"));
    assert!(stderr.contains("path separator"));
}

#[test]
fn windows_platform_rejects_backslash_forms() {
    let output = snapguard(&[
        "check",
        "--platform",
        "windows",
        "..\\..\\etc\\passwd",
        "subdir\\file",
        "\\etc\\passwd",
        "C:\\Windows",
    ]);
    assert_eq!(output.status.code(), Some(1));

    let report = report_from(&output);
    let checks = report["checks"].as_array().expect("checks array");
    assert!(checks.iter().all(|check| check["accepted"] == false));
    assert_eq!(report["separators"]["alternate"], "/");
}

#[test]
fn platform_env_var_is_honored() {
    let output = Command::new(env!("CARGO_BIN_EXE_snapguard"))
        .args(["check", "subdir\\file"])
        .env("SNAPGUARD_PLATFORM", "windows")
        .output()
        .expect("run snapguard");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(report_from(&output)["platform"], "windows");
}

#[test]
fn invalid_platform_env_var_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_snapguard"))
        .args(["check", "valid_name"])
        .env("SNAPGUARD_PLATFORM", "amiga")
        .output()
        .expect("run snapguard");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SNAPGUARD_PLATFORM"));
}

#[test]
fn writes_report_to_file() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let out = temp_dir.path().join("report.json");
    let out_arg = out.to_str().expect("utf-8 temp path");

    let output = snapguard(&["check", "case_1", "--out", out_arg]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let content = std::fs::read_to_string(&out).expect("read report");
    let report: serde_json::Value = serde_json::from_str(&content).expect("parse report");
    assert_eq!(report["checks"][0]["name"], "case_1");
    assert!(report["tool_version"].as_str().is_some());
}

#[test]
fn rejection_and_error_exit_codes_differ() {
    let rejected = snapguard(&["check", "--platform", "posix", "subdir/file"]);
    assert_eq!(rejected.status.code(), Some(1));

    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let out = temp_dir.path().join("missing").join("report.json");
    let out_arg = out.to_str().expect("utf-8 temp path");
    let failed = snapguard(&["check", "valid_name", "--out", out_arg]);
    assert_eq!(failed.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&failed.stderr).contains("write report"));
}

#[cfg(unix)]
#[test]
fn non_utf8_base_is_refused() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = Command::new(env!("CARGO_BIN_EXE_snapguard"))
        .arg("check")
        .arg("valid_name")
        .arg("--base")
        .arg(OsStr::from_bytes(b"snap\xffshots"))
        .env_remove("SNAPGUARD_PLATFORM")
        .output()
        .expect("run snapguard");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("UTF-8"));
}
