//! # Integration tests for the command lines of `fibload` and `showfib`.
//!
//! These run the compiled binaries as a user would and only look at their
//! exit status and output. The HTTP surface is tested in-process next to
//! the server module.

mod compute;
mod showfib;
mod version;

use std::process::Command;
use std::process::Output;

/// Run one of the binaries with `RUST_BACKTRACE` cleared, so that errors
/// are printed in their user-facing form.
fn run(binary: &str, args: &[&str]) -> Output {
    Command::new(binary)
        .args(args)
        .env_remove("RUST_BACKTRACE")
        .env_remove("RUST_LIB_BACKTRACE")
        .output()
        .unwrap()
}

fn showfib(args: &[&str]) -> Output {
    run(env!("CARGO_BIN_EXE_showfib"), args)
}

fn fibload(args: &[&str]) -> Output {
    run(env!("CARGO_BIN_EXE_fibload"), args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}
