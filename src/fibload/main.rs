//! `fibload` serves deliberately slow Fibonacci computations over HTTP, to
//! give profilers and tracers a predictable workload.

/// The command line interface and relevant structures.
pub mod cli;

/// The HTTP boundary: routing, validation and the accept loop.
pub mod server;

/// The main CLI entry-point of the `fibload` utility.
///
/// This function parses command-line arguments and executes
/// sub-commands as specified by the user.
#[tokio::main]
async fn main() {
    cli::process::parse_command().await;
}
