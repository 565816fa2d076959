//! Integration tests for the `asb` binary.
//!
//! Runs the compiled binary against descriptor files in a temp directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use asb_cli::handlers::absorb::read_apps;

const INPUT: &str = r#"[
    {"id": "app1", "kind": "desktop", "pkgnames": ["app1"], "dependencies": ["pkgA"]},
    {"id": "app1-addon", "kind": "addon", "pkgnames": ["pkgA"], "keywords": ["extra"]},
    {"id": "other", "kind": "addon", "pkgnames": ["pkgB"]}
]"#;

fn asb(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_asb"))
        .args(args)
        .env_remove("ASB_SETTINGS")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run asb")
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_absorb_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.json");
    fs::write(&input, INPUT).unwrap();

    let result = asb(&[
        "absorb",
        "--input",
        path_str(&input),
        "--output",
        path_str(&output),
        "--summary",
    ]);

    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("absorb: 2 kept, 1 merged, 0 dropped (1 tagged)"));

    let apps = read_apps(fs::File::open(&output).unwrap()).unwrap();
    let ids: Vec<&str> = apps.iter().map(|app| app.id.as_str()).collect();
    assert_eq!(ids, vec!["app1", "other"]);
    assert_eq!(apps[0].pkgnames, vec!["app1", "pkgA"]);
    assert_eq!(apps[0].keywords, vec!["extra"]);
}

#[test]
fn test_strict_dangling_reference_exits_with_data_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    fs::write(
        &input,
        r#"[{"id": "a", "kind": "addon", "metadata": {"X-Merge-With-Parent": "ghost"}}]"#,
    )
    .unwrap();

    let result = asb(&["absorb", "--input", path_str(&input), "--strict"]);

    assert_eq!(result.status.code(), Some(65));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Cannot find referenced 'ghost' from 'a'"));
}

#[test]
fn test_strict_duplicate_id_exits_with_data_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    fs::write(
        &input,
        r#"[{"id": "dup", "kind": "desktop"}, {"id": "dup", "kind": "font"}]"#,
    )
    .unwrap();

    let result = asb(&["absorb", "--input", path_str(&input), "--strict"]);

    assert_eq!(result.status.code(), Some(65));
    assert!(result.stdout.is_empty());
}

#[test]
fn test_lenient_dangling_reference_drops_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    fs::write(
        &input,
        r#"[{"id": "a", "kind": "addon", "metadata": {"X-Merge-With-Parent": "ghost"}},
            {"id": "b", "kind": "font"}]"#,
    )
    .unwrap();

    let result = asb(&["absorb", "--input", path_str(&input)]);

    assert!(result.status.success());
    let apps = read_apps(result.stdout.as_slice()).unwrap();
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].id, "b");
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    let result = asb(&["absorb", "--input", path_str(&missing)]);

    assert_eq!(result.status.code(), Some(74));
}

#[test]
fn test_settings_file_selects_strict_policy() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.json");
    let input = dir.path().join("in.json");
    fs::write(&settings, r#"{"dangling_policy": "strict"}"#).unwrap();
    fs::write(
        &input,
        r#"[{"id": "a", "kind": "addon", "metadata": {"X-Merge-With-Parent": "a"}}]"#,
    )
    .unwrap();

    let result = asb(&[
        "--settings",
        path_str(&settings),
        "absorb",
        "--input",
        path_str(&input),
    ]);

    assert_eq!(result.status.code(), Some(65));
    assert!(result.stdout.is_empty());
}

#[test]
fn test_unknown_settings_key_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.json");
    fs::write(&settings, r#"{"merge_key": "X-Parent"}"#).unwrap();

    let result = asb(&["--settings", path_str(&settings), "plugins"]);

    assert_eq!(result.status.code(), Some(78));
}

#[test]
fn test_plugins_lists_absorb() {
    let result = asb(&["plugins"]);

    assert!(result.status.success());
    assert_eq!(String::from_utf8_lossy(&result.stdout), "absorb\n");
}
