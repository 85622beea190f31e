use std::fs;
use std::process::Command;

use tempfile::tempdir;

const PAGE: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <script type="module" crossorigin src="/assets/index-D4x9.js"></script>
    <link rel="stylesheet" crossorigin href="/assets/index-B7q2.css">
  </head>
  <body><div id="root"></div></body>
</html>
"#;

#[test]
fn test_missing_input_exits_non_zero() {
    let dir = tempdir().unwrap();
    let bin = env!("CARGO_BIN_EXE_asset-hints");

    let output = Command::new(bin)
        .current_dir(dir.path())
        .args(["--color", "never"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!dir.path().join("dist/index.html").exists());
    assert!(!dir.path().join("dist/index.html.backup").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("failed to read"),
        "should report the read failure; got:\n{}",
        stdout
    );
}

#[test]
fn test_default_input_rewritten_with_backup() {
    let dir = tempdir().unwrap();
    let bin = env!("CARGO_BIN_EXE_asset-hints");
    fs::create_dir_all(dir.path().join("dist")).unwrap();
    fs::write(dir.path().join("dist/index.html"), PAGE).unwrap();

    let output = Command::new(bin)
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("found 1 script"), "got:\n{}", stdout);

    let backup = fs::read_to_string(dir.path().join("dist/index.html.backup")).unwrap();
    assert_eq!(backup, PAGE);

    let written = fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
    assert!(written.contains(r#"href="/assets/index-D4x9.js" as="script""#));
    assert!(written.contains(r#"href="/assets/index-B7q2.css" as="style""#));
}

#[test]
fn test_config_file_and_cli_input() {
    let dir = tempdir().unwrap();
    let bin = env!("CARGO_BIN_EXE_asset-hints");
    fs::create_dir_all(dir.path().join("build")).unwrap();
    fs::write(dir.path().join("build/page.html"), PAGE).unwrap();
    fs::write(
        dir.path().join("hints.toml"),
        "[paths]\nbackup_suffix = \".orig\"\n\n[hints]\nfont_display = false\n",
    )
    .unwrap();

    let output = Command::new(bin)
        .current_dir(dir.path())
        .args(["build/page.html"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(dir.path().join("build/page.html.orig").exists());

    let written = fs::read_to_string(dir.path().join("build/page.html")).unwrap();
    assert!(written.contains("rel=\"preconnect\""));
    assert!(!written.contains("@font-face"));
}

#[test]
fn test_invalid_config_exits_non_zero() {
    let dir = tempdir().unwrap();
    let bin = env!("CARGO_BIN_EXE_asset-hints");
    fs::write(dir.path().join("hints.toml"), "[hints]\nmain_marker = \"\"\n").unwrap();

    let output = Command::new(bin)
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
}
