use std::fs;

use tempdir::TempDir;

use crate::fibload;
use crate::stderr;
use crate::stdout;

#[test]
fn test_fibload_term() {
    let out = fibload(&["term", "10"]);

    assert!(out.status.success());
    assert_eq!("55\n", stdout(&out));
}

#[test]
fn test_fibload_report() {
    let out = fibload(&["report", "3"]);

    assert!(out.status.success());
    assert_eq!("Fib(1)\t= 1\nFib(2)\t= 1\nFib(3)\t= 2\n", stdout(&out));
}

#[test]
fn test_fibload_verbose_term_logs_the_task() {
    let out = fibload(&["-v", "term", "6"]);

    assert!(out.status.success());
    assert_eq!("8\n", stdout(&out));
    assert!(stderr(&out).contains("UniqueFib"));
}

#[test]
fn test_fibload_too_verbose() {
    let out = fibload(&["-vvv", "term", "6"]);

    assert!(!out.status.success());
    assert!(stderr(&out).contains("verbosity"));
}

#[test]
fn test_fibload_serve_with_missing_config() {
    let out = fibload(&["--config", "/definitely/not/here/fibload.toml", "serve"]);

    assert!(!out.status.success());
    assert!(stderr(&out).contains("Could not read the file"));
}

#[test]
fn test_fibload_serve_with_invalid_config() {
    let dir = TempDir::new("fibload_config").unwrap();
    let path = dir.path().join("fibload.toml");
    fs::write(&path, "layout = \"triple\"\n").unwrap();

    let out = fibload(&["--config", path.to_str().unwrap(), "serve"]);

    assert!(!out.status.success());
    assert!(stderr(&out).contains("Could not parse"));
}
