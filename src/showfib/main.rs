//! Print the Fibonacci report from 1 up to n and exit.
//!
//! Run with a single index:
//!   showfib 30
//! and add `--profile` to get the measurement of the computation on stderr,
//! as TOML, next to the report on stdout.

use std::process::exit;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use fibload_lib::ctx;
use fibload_lib::error::render_error;
use fibload_lib::fibonacci::compute_sequence_report;
use fibload_lib::measurement::measure;

/// Print the Fibonacci report from 1 to n.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// The last index of the report.
    #[arg(allow_negative_numbers = true)]
    n: i64,

    /// Write the wall time and resource usage of the computation to stderr.
    #[arg(short, long)]
    profile: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(err) = process(&args) {
        eprint!("{}", render_error(&err));
        exit(1);
    }
}

fn process(args: &Args) -> Result<()> {
    let (report, measurement) = measure(|| compute_sequence_report(args.n));

    println!("{report}");

    if args.profile {
        eprint!(
            "{}",
            toml::to_string(&measurement).with_context(ctx!(
                "Could not serialize the measurement", ;
                "",
            ))?
        );
    }

    Ok(())
}
