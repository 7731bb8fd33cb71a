//! End-to-end runs of the classname-prefixer binary.
//!
//! Every test builds its own project in a temporary directory and inspects the
//! files written, the JSON report and the exit status.

use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// ============================================================================
// TEST INFRASTRUCTURE
// ============================================================================

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_classname-prefixer"))
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(binary_path())
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run classname-prefixer")
}

fn write(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read(dir: &Path, relative: &str) -> String {
    fs::read_to_string(dir.join(relative)).unwrap()
}

fn json_report(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be a JSON report")
}

// ============================================================================
// DESTINATIONS
// ============================================================================

#[test]
fn test_single_file_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Button.jsx", r#"<button className="btn" />;"#);

    let output = run(dir.path(), &["Button.jsx"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        r#"<button className="app-btn" />;"#
    );
    assert_eq!(read(dir.path(), "Button.jsx"), r#"<button className="btn" />;"#);
}

#[test]
fn test_write_in_place() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/a.tsx", r#"const a = <div className={on ? "x" : "y"} />;"#);
    write(dir.path(), "src/b.ts", "export const b = 1;\n");

    let output = run(dir.path(), &["src", "--write", "--prefix", "ui", "--output", "json"]);
    assert!(output.status.success());
    assert_eq!(
        read(dir.path(), "src/a.tsx"),
        r#"const a = <div className={on ? "ui-x" : "ui-y"} />;"#
    );
    assert_eq!(read(dir.path(), "src/b.ts"), "export const b = 1;\n");

    let report = json_report(&output);
    assert_eq!(report["summary"]["file_count"], 2);
    assert_eq!(report["summary"]["changed_count"], 1);
    assert_eq!(report["summary"]["rewrite_count"], 2);
}

#[test]
fn test_out_dir_mirrors_tree() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/components/Card.jsx", "<section className='card' />;");

    let output = run(dir.path(), &["src", "--out-dir", "build"]);
    assert!(output.status.success());
    assert_eq!(
        read(dir.path(), "build/components/Card.jsx"),
        "<section className='app-card' />;"
    );
    assert_eq!(
        read(dir.path(), "src/components/Card.jsx"),
        "<section className='card' />;"
    );
}

// ============================================================================
// OPTIONS
// ============================================================================

#[test]
fn test_options_query_and_names() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.jsx", r#"<div class={cx("a")} className="b" />;"#);

    let output = run(
        dir.path(),
        &[
            "a.jsx",
            "--options",
            r#"{"attributeName":"class"}"#,
            "--query",
            "?prefix=kit&joinCallName=cx",
        ],
    );
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        r#"<div class={cx("kit-a")} className="b" />;"#
    );
}

#[test]
fn test_invalid_options_fail_before_processing() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.jsx", r#"<div className="b" />;"#);

    let output = run(dir.path(), &["a.jsx", "--write", "--options", "{not json"]);
    assert!(!output.status.success());
    assert_eq!(read(dir.path(), "a.jsx"), r#"<div className="b" />;"#);
}

#[test]
fn test_ignore_glob() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/a.jsx", r#"<i className="a" />;"#);
    write(dir.path(), "src/legacy/b.jsx", r#"<i className="b" />;"#);

    let output = run(dir.path(), &["src", "--write", "--ignore", "legacy/**"]);
    assert!(output.status.success());
    assert_eq!(read(dir.path(), "src/a.jsx"), r#"<i className="app-a" />;"#);
    assert_eq!(read(dir.path(), "src/legacy/b.jsx"), r#"<i className="b" />;"#);
}

#[test]
fn test_regex_strategy() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "a.jsx",
        r#"<div className="a" title={on ? "x" : "y"} />;"#,
    );

    let output = run(dir.path(), &["a.jsx", "--strategy", "regex"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        r#"<div className="app-a" title={on ? "x" : "y"} />;"#
    );
}

// ============================================================================
// FAILURES AND DEBUG LOG
// ============================================================================

#[test]
fn test_parse_error_fails_the_run_but_not_other_files() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/bad.jsx", r#"<div className="a">"#);
    write(dir.path(), "src/good.jsx", r#"<div className="a" />;"#);

    let output = run(dir.path(), &["src", "--write", "--output", "json"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(read(dir.path(), "src/bad.jsx"), r#"<div className="a">"#);
    assert_eq!(read(dir.path(), "src/good.jsx"), r#"<div className="app-a" />;"#);

    let report = json_report(&output);
    assert_eq!(report["summary"]["failed_count"], 1);
    let failed = report["files"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["status"] == "failed")
        .unwrap();
    assert!(failed["path"].as_str().unwrap().ends_with("bad.jsx"));
    assert!(failed["error"].as_str().unwrap().starts_with("parse error"));
}

#[test]
fn test_debug_log() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.jsx", r#"<div className="a b" />;"#);

    let output = run(
        dir.path(),
        &["a.jsx", "--enable-debugging", "--debug-log", "rewrites.log"],
    );
    assert!(output.status.success());
    assert_eq!(
        read(dir.path(), "rewrites.log"),
        "Original: \"a b\" => Updated: \"app-a app-b\"\n\n"
    );
}

#[test]
fn test_no_debug_log_by_default() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.jsx", r#"<div className="a" />;"#);

    let output = run(dir.path(), &["a.jsx"]);
    assert!(output.status.success());
    assert!(!dir.path().join("classnames.log").exists());
}
