mod utils;

use std::process::{Command, Output};
use tempfile::TempDir;
use utils::packaged_templates;

fn helix(args: &[&str], working_dir: &std::path::Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_helix"))
        .args(args)
        .current_dir(working_dir)
        .env("HELIX_TEMPLATES_DIR", packaged_templates())
        .output()
        .expect("failed to run helix binary")
}

#[test]
fn no_arguments_print_usage_and_fail() {
    let work = TempDir::new().unwrap();
    let output = helix(&[], work.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage:"));
}

#[test]
fn unknown_command_prints_usage_and_fails() {
    let work = TempDir::new().unwrap();
    let output = helix(&["deploy"], work.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage:"));
}

#[test]
fn help_succeeds() {
    let work = TempDir::new().unwrap();
    let output = helix(&["--help"], work.path());

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("create"));
}

#[test]
fn unknown_template_fails_before_touching_disk() {
    let work = TempDir::new().unwrap();
    let output = helix(&["create", "shop", "blogapp"], work.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown template 'blogapp'"));
    assert!(!work.path().join("shop").exists());
}

#[test]
fn missing_template_is_reported_as_not_available() {
    let work = TempDir::new().unwrap();
    let output = helix(&["create", "shop", "welcomeapp"], work.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not yet available"));
    assert!(!work.path().join("shop").exists());
}

#[test]
fn existing_destination_is_rejected() {
    let work = TempDir::new().unwrap();
    std::fs::create_dir(work.path().join("shop")).unwrap();
    let output = helix(&["create", "shop"], work.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
}

#[test]
fn start_without_build_output_names_rebuild_command() {
    let work = TempDir::new().unwrap();
    let output = helix(&["start"], work.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("dist/api/server.js"));
    assert!(stderr.contains("npm run build:api"));
}
