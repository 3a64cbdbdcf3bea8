use clap::crate_version;

use crate::fibload;
use crate::showfib;
use crate::stdout;

#[test]
fn test_fibload_short_version() {
    let out = fibload(&["version", "-s"]);

    assert!(out.status.success());
    assert_eq!(format!("fibload {}\n", crate_version!()), stdout(&out));
}

#[test]
fn test_fibload_version() {
    let out = fibload(&["version"]);

    assert!(out.status.success());
    assert!(stdout(&out).contains(crate_version!()));
}

#[test]
fn test_showfib_version() {
    let out = showfib(&["--version"]);

    assert!(out.status.success());
    assert!(stdout(&out).contains(crate_version!()));
}
