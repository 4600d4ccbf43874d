//! End-to-end tests for the vcheck binary: report format and the exit
//! code contract.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// Template shipped at the workspace root
fn template_path() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = std::path::Path::new(&manifest_dir).parent().unwrap().parent().unwrap();
    workspace_root.join("templates/dcp.jsonc.tmpl")
}

/// Cost-definition source shipped at the workspace root
fn cost_source_path() -> PathBuf {
    template_path().parent().unwrap().parent().unwrap().join("costs/model-prices.env")
}

fn vcheck() -> Command {
    let mut cmd = Command::cargo_bin("vcheck").unwrap();
    cmd.env_remove("VCHECK_PROFILE")
        .env_remove("VCHECK_TEMPLATE")
        .env_remove("VCHECK_BUDGET_CMD")
        .env_remove("VCHECK_COST_SOURCE")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

// =============================================================================
// Exit codes
// =============================================================================

#[test]
fn test_template_passes_with_exit_zero() {
    vcheck()
        .arg("--template")
        .arg(template_path())
        .arg("template")
        .assert()
        .success()
        .stdout(predicate::str::contains("== template-content =="))
        .stdout(predicate::str::contains("✓ PASS required configuration keys"))
        .stdout(predicate::str::contains("Tests run: 14, Passed: 14, Failed: 0"));
}

#[test]
fn test_missing_template_exits_one_with_details() {
    vcheck()
        .args(["--template", "/nonexistent/dcp.jsonc.tmpl", "template"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ FAIL template exists"))
        .stdout(predicate::str::contains("    Expected: /nonexistent/dcp.jsonc.tmpl"))
        .stdout(predicate::str::contains("    Actual:   missing"));
}

#[test]
fn test_cost_tolerates_missing_budget_command() {
    vcheck()
        .arg("--cost-source")
        .arg(cost_source_path())
        .args(["--budget-cmd", "vcheck-no-such-budget-tool", "cost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INFO repeated status invocations"))
        .stdout(predicate::str::contains("Failed: 0"));
}

#[test]
fn test_cost_without_source_fails_once() {
    let dir = tempfile::tempdir().unwrap();
    vcheck()
        .current_dir(dir.path())
        .args(["--no-latency", "cost"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ FAIL cost source exists"))
        .stdout(predicate::str::contains("Failed: 1"));
}

#[test]
fn test_cost_source_from_env() {
    vcheck()
        .env("VCHECK_COST_SOURCE", cost_source_path())
        .args(["--no-latency", "cost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ PASS cost definition 'claude-opus'"));
}

#[test]
fn test_all_reports_overall_summary() {
    vcheck()
        .arg("--template")
        .arg(template_path())
        .arg("--cost-source")
        .arg(cost_source_path())
        .arg("--no-latency")
        .assert()
        .success()
        .stdout(predicate::str::contains("== cost-model =="))
        .stdout(predicate::str::contains("Overall: Tests run: 35, Passed: 35, Failed: 0"));
}

// =============================================================================
// JSON output
// =============================================================================

#[test]
fn test_json_output() {
    let output = vcheck()
        .arg("--template")
        .arg(template_path())
        .arg("--cost-source")
        .arg(cost_source_path())
        .args(["--no-latency", "--format", "json", "all"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["reports"][0]["suite"], "cost-model");
    assert_eq!(json["reports"][1]["suite"], "template-content");
    assert_eq!(json["summary"]["failed"], 0);
}

// =============================================================================
// Profiles
// =============================================================================

#[test]
fn test_profile_file_overrides_template_path() {
    let dir = tempfile::tempdir().unwrap();
    let profile = dir.path().join("profile.yaml");
    std::fs::write(
        &profile,
        format!("name: ci@1.0\ntemplate:\n  path: {}\n", template_path().display()),
    )
    .unwrap();

    vcheck()
        .arg("--profile")
        .arg(&profile)
        .arg("template")
        .assert()
        .success();
}

#[test]
fn test_malformed_profile_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let profile = dir.path().join("profile.yaml");
    std::fs::write(&profile, "cost: [unclosed").unwrap();

    vcheck()
        .arg("--profile")
        .arg(&profile)
        .arg("template")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CONFIG/"));
}

#[test]
fn test_profile_command_prints_yaml() {
    vcheck()
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("name: default@1.0"))
        .stdout(predicate::str::contains("placeholder_value"));
}
