//! The building process.
//!
//! The shell completions of `fibload` are generated and placed in
//! `[output_dir]/completions/`.

#![allow(unused)]
#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::fs;

use anyhow::Context;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate_to;
use clap_complete::shells::Bash;
use clap_complete::shells::Fish;
use clap_complete::shells::PowerShell;
use clap_complete::shells::Zsh;

// Brings `PathBuf` and the `Cli` definition into scope.
include!("src/fibload/cli/def.rs");

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=src/fibload/cli/def.rs");

    let out_dir = PathBuf::from(env::var("OUT_DIR").context("OUT_DIR is not set")?);
    let completions = out_dir.join("completions");
    fs::create_dir_all(&completions)
        .with_context(|| format!("Could not create {completions:?}"))?;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate_to(Bash, &mut cmd, &name, &completions)?;
    generate_to(Fish, &mut cmd, &name, &completions)?;
    generate_to(Zsh, &mut cmd, &name, &completions)?;
    generate_to(PowerShell, &mut cmd, &name, &completions)?;

    Ok(())
}
