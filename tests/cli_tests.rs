//! Integration tests for the lode CLI
//!
//! Runs the compiled binary against fixture catalogs and checks stdout
//! and exit codes.

use std::path::Path;
use std::process::{Command, Output};

fn lode(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lode"))
        .args(args)
        .output()
        .expect("failed to execute lode")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout).lines().map(str::to_string).collect()
}

#[test]
fn test_resolve_vanilla_name() {
    let output = lode(&["resolve", "Terra Blade"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["https://terraria.wiki.gg/images/Terra_Blade.png"]
    );
}

#[test]
fn test_resolve_chain_for_modded_name() {
    let output = lode(&["resolve", "Storm Weaver", "--mod", "calamity", "--chain"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "https://calamitymod.wiki.gg/images/Storm_Weaver.png");
    assert_eq!(lines[1], "https://calamitymod.wiki.gg/images/StormWeaver.png");
    assert!(lines[5].starts_with("data:image/svg+xml;base64,"));
}

#[test]
fn test_resolve_with_fixture_override() {
    let output = lode(&[
        "resolve",
        "Fiery Greatsword",
        "--data",
        "tests/fixtures/valid/overrides.jsonl",
    ]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["https://terraria.wiki.gg/images/Volcano_%28old%29.png"]
    );
}

#[test]
fn test_resolve_json_output() {
    let output = lode(&["resolve", "Terra Blade", "--json"]);
    assert!(output.status.success());

    let parsed: Vec<String> =
        serde_json::from_slice(&output.stdout).expect("stdout should be a JSON array");
    assert_eq!(parsed, vec!["https://terraria.wiki.gg/images/Terra_Blade.png"]);
}

#[test]
fn test_rank_uses_builtin_tables() {
    let output = lode(&["rank", "eater of worlds"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["2\teater of worlds"]);
}

#[test]
fn test_rank_unknown_name_is_sentinel() {
    let output = lode(&["rank", "Not A Boss"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["999\tNot A Boss"]);
}

#[test]
fn test_sort_orders_by_progression() {
    let output = lode(&["sort", "Moon Lord", "mystery entry", "King Slime", "Skeletron"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["King Slime", "Skeletron", "Moon Lord", "mystery entry"]
    );
}

#[test]
fn test_placeholder_prints_data_uri() {
    let output = lode(&["placeholder", "Excalibur", "--size", "40"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("data:image/svg+xml;base64,"));
}

#[test]
fn test_placeholder_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tile.png");

    let output = lode(&[
        "placeholder",
        "Excalibur",
        "--png",
        path.to_str().unwrap(),
        "--scale",
        "2",
    ]);
    assert!(output.status.success());
    assert!(path.exists());

    let image = image::open(&path).unwrap();
    assert_eq!(image.width(), 16);
    assert_eq!(image.height(), 16);
}

#[test]
fn test_missing_catalog_is_invalid_args() {
    let output = lode(&["resolve", "Terra Blade", "--data", "no/such/catalog.jsonl"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot open catalog"));
}

#[test]
fn test_strict_mode_fails_on_bad_catalog() {
    let fixture = Path::new("tests/fixtures/invalid/bad_line.jsonl");
    assert!(fixture.exists(), "fixture moved?");

    let lenient = lode(&["rank", "King Slime", "--data", "tests/fixtures/invalid/bad_line.jsonl"]);
    assert!(lenient.status.success());
    assert!(String::from_utf8_lossy(&lenient.stderr).contains("Warning:"));

    let strict = lode(&[
        "rank",
        "King Slime",
        "--data",
        "tests/fixtures/invalid/bad_line.jsonl",
        "--strict",
    ]);
    assert_eq!(strict.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&strict.stderr).contains("Error:"));
}
