use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::builder::PossibleValue;
use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

/// Structure of the main command (fibload).
#[allow(unused)]
#[derive(Parser, Debug)]
#[command(
    about = "fibload, a deliberately wasteful Fibonacci service",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// The main command issued.
    #[command(subcommand)]
    pub command: FibloadCommand,

    /// The path to the config file [default: ./fibload.toml].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose mode, displays debug info. For even more try: -vv.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments supplied with the `serve` command.
#[derive(Args, Debug, Clone)]
pub struct ServeStruct {
    /// The routes to expose, overrides the config.
    #[arg(short, long, value_parser = [
        PossibleValue::new("split"),
        PossibleValue::new("single"),
    ])]
    pub layout: Option<String>,

    /// The address to listen on, overrides the config.
    #[arg(short, long)]
    pub address: Option<SocketAddr>,

    /// Give up on a computation after this long, for example `30s`.
    #[arg(short, long, value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,

    /// Do not record computations nor serve `/debug/profile`.
    #[arg(long)]
    pub no_profiling: bool,
}

/// Arguments supplied with the `term` and `report` commands.
#[derive(Args, Debug, Clone, Copy)]
pub struct ComputeStruct {
    /// The index to compute up to.
    #[arg(allow_negative_numbers = true)]
    pub n: i64,
}

/// Arguments supplied with the `version` command.
#[derive(Args, Debug, Clone, Copy)]
pub struct VersionStruct {
    /// Print only the name and version, for use in scripts.
    #[arg(short, long)]
    pub short: bool,
}

/// Enum for root-level `fibload` commands.
#[derive(Subcommand, Debug)]
pub enum FibloadCommand {
    /// Start the HTTP server.
    #[command()]
    Serve(ServeStruct),

    /// Compute a single term and print it.
    #[command()]
    Term(ComputeStruct),

    /// Compute the report from 1 to n and print it.
    #[command()]
    Report(ComputeStruct),

    /// Print information about the version.
    #[command()]
    Version(VersionStruct),
}
