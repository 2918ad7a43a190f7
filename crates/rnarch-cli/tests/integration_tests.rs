//! Integration tests for rnarch-cli.
//!
//! These run the real binary against temp directories, so they cover the
//! full path: argument parsing, sidecar handling, filesystem writes and
//! exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rnarch() -> Command {
    Command::cargo_bin("rnarch").unwrap()
}

fn init_clean(dir: &TempDir) {
    rnarch()
        .current_dir(dir.path())
        .args([
            "init",
            "--arch",
            "clean",
            "--state",
            "redux",
            "--routing",
            "react-navigation",
        ])
        .assert()
        .success();
}

#[test]
fn help_lists_subcommands() {
    rnarch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("feature"))
        .stdout(predicate::str::contains("model"))
        .stdout(predicate::str::contains("screen"));
}

#[test]
fn version_flag() {
    rnarch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn init_creates_base_structure_and_sidecar() {
    let temp = TempDir::new().unwrap();
    init_clean(&temp);

    assert!(temp.path().join(".rnarch.json").exists());
    assert!(temp.path().join("src/App.tsx").exists());
    assert!(temp.path().join("src/navigation/AppNavigator.tsx").exists());
    assert!(temp.path().join("src/core/api/apiClient.ts").exists());

    // init also scaffolds the starter auth feature
    assert!(
        temp.path()
            .join("src/features/auth/presentation/screens/LoginScreen.tsx")
            .exists()
    );

    let sidecar = fs::read_to_string(temp.path().join(".rnarch.json")).unwrap();
    assert!(sidecar.contains("\"cleanArchitecture\""));
}

#[test]
fn init_merges_manifest_dependencies() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), r#"{"name": "app"}"#).unwrap();
    init_clean(&temp);

    let manifest = fs::read_to_string(temp.path().join("package.json")).unwrap();
    assert!(manifest.contains("@reduxjs/toolkit"));
    assert!(manifest.contains("@react-navigation/native"));
}

#[test]
fn feature_without_init_fails_with_config_exit_code() {
    let temp = TempDir::new().unwrap();
    rnarch()
        .current_dir(temp.path())
        .args(["feature", "orders"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("not initialised"))
        .stderr(predicate::str::contains("rnarch init"));
}

#[test]
fn feature_generates_and_registers_screen() {
    let temp = TempDir::new().unwrap();
    init_clean(&temp);

    rnarch()
        .current_dir(temp.path())
        .args(["feature", "orders"])
        .assert()
        .success();

    let feature_root = temp.path().join("src/features/orders");
    assert!(feature_root.join("domain/entities/ordersEntity.ts").exists());
    assert!(
        feature_root
            .join("presentation/screens/OrdersScreen.tsx")
            .exists()
    );

    let navigator =
        fs::read_to_string(temp.path().join("src/navigation/AppNavigator.tsx")).unwrap();
    assert!(navigator.contains("name=\"Orders\""));
    assert!(navigator.contains("Orders: undefined;"));
}

#[test]
fn feature_accepts_project_root_flag() {
    let temp = TempDir::new().unwrap();
    init_clean(&temp);

    let root = temp.path().to_str().unwrap();
    rnarch()
        .args(["-C", root, "feature", "billing"])
        .assert()
        .success();

    assert!(temp.path().join("src/features/billing").exists());
}

#[test]
fn expo_router_init_skips_navigator_registration() {
    let temp = TempDir::new().unwrap();
    rnarch()
        .current_dir(temp.path())
        .args([
            "init",
            "--arch",
            "feature",
            "--state",
            "zustand",
            "--routing",
            "expo-router",
        ])
        .assert()
        .success();

    let navigator =
        fs::read_to_string(temp.path().join("src/navigation/AppNavigator.tsx")).unwrap();
    // auth is generated at init time but file-based routing has no registry
    assert!(!navigator.contains("LoginScreen"));
}

#[test]
fn model_without_init_falls_back_to_shared_location() {
    let temp = TempDir::new().unwrap();
    rnarch()
        .current_dir(temp.path())
        .args(["model", "AppSettings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AppSettingsModel.ts"));

    assert!(
        temp.path()
            .join("src/core/models/AppSettingsModel.ts")
            .exists()
    );
}

#[test]
fn model_into_feature_uses_architecture_layout() {
    let temp = TempDir::new().unwrap();
    init_clean(&temp);

    rnarch()
        .current_dir(temp.path())
        .args(["model", "Invoice", "--feature", "billing"])
        .assert()
        .success();

    assert!(
        temp.path()
            .join("src/features/billing/data/models/InvoiceModel.ts")
            .exists()
    );
}

#[test]
fn screen_registers_in_navigator() {
    let temp = TempDir::new().unwrap();
    init_clean(&temp);

    rnarch()
        .current_dir(temp.path())
        .args(["screen", "Settings"])
        .assert()
        .success();

    assert!(
        temp.path()
            .join("src/presentation/screens/SettingsScreen.tsx")
            .exists()
    );
    let navigator =
        fs::read_to_string(temp.path().join("src/navigation/AppNavigator.tsx")).unwrap();
    assert!(navigator.contains("name=\"Settings\""));
}

#[test]
fn quiet_init_produces_no_stdout() {
    let temp = TempDir::new().unwrap();
    rnarch()
        .current_dir(temp.path())
        .args(["-q", "init", "--arch", "mvvm", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn invalid_architecture_value_is_a_parse_error() {
    rnarch()
        .args(["init", "--arch", "layered"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn shell_completions_print_script() {
    rnarch()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}
