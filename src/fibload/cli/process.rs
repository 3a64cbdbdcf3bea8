use std::env;
use std::process::exit;
use std::sync::Arc;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use clap::CommandFactory;
use clap::FromArgMatches;
use colog::default_builder;
use colog::formatter;
use fibload_lib::config::Config;
use fibload_lib::constants::CONFIG_DEFAULT;
use fibload_lib::constants::PRIMARY_STYLE;
use fibload_lib::constants::SEQUENCE_REGION;
use fibload_lib::constants::SEQUENCE_TASK;
use fibload_lib::constants::TERM_REGION;
use fibload_lib::constants::TERM_TASK;
use fibload_lib::ctx;
use fibload_lib::error::render_error;
use fibload_lib::fibonacci::compute_sequence_report;
use fibload_lib::fibonacci::compute_term;
use fibload_lib::file_system::FileSystemInteractor;
use fibload_lib::measurement::Task;
use log::debug;
use log::info;
use log::trace;
use log::LevelFilter;

use super::log::LogTokens;
use super::printing::get_styles;
use crate::cli::def::Cli;
use crate::cli::def::ComputeStruct;
use crate::cli::def::FibloadCommand;
use crate::cli::def::ServeStruct;
use crate::cli::def::VersionStruct;
use crate::cli::printing::print_version;
use crate::server::bind;
use crate::server::router::Router;
use crate::server::serve;
use crate::server::shutdown_signal;

/// This function parses command that fibload was run with.
pub async fn parse_command() {
    let styled = Cli::command().styles(get_styles()).get_matches();

    // `get_matches` already exited with a usage error if the command is wrong.
    let command = match Cli::from_arg_matches(&styled) {
        Ok(command) => command,
        Err(e) => e.exit(),
    };

    // https://github.com/rust-lang/rust/blob/master/library/std/src/backtrace.rs
    let backtrace_enabled = match env::var("RUST_LIB_BACKTRACE") {
        Ok(s) => s != "0",
        Err(_) => match env::var("RUST_BACKTRACE") {
            Ok(s) => s != "0",
            Err(_) => false,
        },
    };

    if backtrace_enabled {
        if let Err(e) = process_command(&command).await {
            eprintln!("{e:?}");
            exit(1);
        }
    } else if let Err(e) = process_command(&command).await {
        eprint!("{}", render_error(&e));
        exit(1);
    }
}

/// CLAP has parsed the command, now we process it.
pub async fn process_command(cmd: &Cli) -> Result<()> {
    setup_logging(cmd)?;

    let file_system = FileSystemInteractor;

    match &cmd.command {
        FibloadCommand::Serve(args) => {
            let config = apply_overrides(load_config(cmd, &file_system)?, args)?;
            trace!("The config is: {config:#?}");

            let router = Router::from_config(&config);
            let listener = bind(config.address).await?;

            info!(
                "Listening on {PRIMARY_STYLE}{}{PRIMARY_STYLE:#} with the {} layout",
                listener.local_addr().unwrap_or(config.address),
                config.layout
            );
            info!("Serving {}", router.paths().collect::<Vec<_>>().join(", "));

            if let Some(limit) = config.compute_timeout {
                info!("Computations time out after {}", humantime::format_duration(limit));
            }

            serve(listener, Arc::new(router), shutdown_signal()).await?;
        }

        FibloadCommand::Term(ComputeStruct { n }) => {
            let task = Task::new(TERM_TASK, None);
            task.log("n value", n);

            let (term, measurement) = task.region(TERM_REGION, || compute_term(*n));
            println!("{term}");

            debug!("Computed in {:?}", measurement.wall);
        }

        FibloadCommand::Report(ComputeStruct { n }) => {
            let task = Task::new(SEQUENCE_TASK, None);
            task.log("n value", n);

            let (report, measurement) =
                task.region(SEQUENCE_REGION, || compute_sequence_report(*n));
            println!("{report}");

            debug!("Computed in {:?}", measurement.wall);
        }

        FibloadCommand::Version(VersionStruct { short }) => print_version(*short),
    }

    Ok(())
}

/// Read the config file given on the command line, or the default one if
/// it exists.
fn load_config(cmd: &Cli, file_system: &FileSystemInteractor) -> Result<Config> {
    match &cmd.config {
        Some(path) => Config::load(path, true, file_system),
        None => Config::load(&CONFIG_DEFAULT(), false, file_system),
    }
}

/// Command line flags take precedence over the config file.
fn apply_overrides(mut config: Config, args: &ServeStruct) -> Result<Config> {
    if let Some(layout) = &args.layout {
        config.layout = layout.parse()?;
    }

    if let Some(address) = args.address {
        config.address = address;
    }

    if let Some(limit) = args.timeout {
        config.compute_timeout = Some(limit);
    }

    if args.no_profiling {
        config.profiling = false;
    }

    Ok(config)
}

/// Initialize the logger with the verbosity requested on the command line.
fn setup_logging(cmd: &Cli) -> Result<()> {
    let mut log_build = default_builder();
    log_build.format(formatter(LogTokens));

    if cmd.verbose == 2 {
        log_build.filter(None, LevelFilter::Trace);
    } else if cmd.verbose == 1 {
        log_build.filter(None, LevelFilter::Debug);
    } else if cmd.verbose == 0 {
        log_build.filter(None, LevelFilter::Info);
    } else {
        return Err(anyhow!("Only two levels of verbosity supported (ie. -vv)")).context("");
    }

    log_build.try_init().with_context(ctx!(
        "Failed to initialize the logger", ;
        "Make sure you are using a supported terminal",
    ))
}

#[cfg(test)]
#[path = "tests/process.rs"]
mod tests;
