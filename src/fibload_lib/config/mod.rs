use std::fmt;
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use anyhow::Result;
use log::debug;
use serde::Deserialize;
use serde::Serialize;

use self::duration::deserialize_optional_duration;
use self::duration::serialize_optional_duration;
use crate::bailc;
use crate::constants::ADDRESS_DEFAULT;
use crate::constants::PRIMARY_STYLE;
use crate::constants::PROFILING_DEFAULT;
use crate::error::ctx;
use crate::file_system::FileOperations;

/// (De)serialization of human-readable durations.
pub mod duration;

/// Which routes the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteLayout {
    /// `/unique` serves a single term and `/multiple` serves the report.
    #[default]
    Split,

    /// `/` serves the report, there is no single-term route.
    Single,
}

impl fmt::Display for RouteLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteLayout::Split => write!(f, "split"),
            RouteLayout::Single => write!(f, "single"),
        }
    }
}

impl FromStr for RouteLayout {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "split" => Ok(RouteLayout::Split),
            "single" => Ok(RouteLayout::Single),
            other => {
                bailc!(
                    "Unknown route layout {other:?}", ;
                    "", ;
                    "The layout is either {PRIMARY_STYLE}split{PRIMARY_STYLE:#} or \
                    {PRIMARY_STYLE}single{PRIMARY_STYLE:#}",
                );
            }
        }
    }
}

/// A config struct used throughout the `fibload` server.
///
/// # Examples
///
/// ```toml
/// address = "127.0.0.1:8000"
/// layout = "single"
/// profiling = false
/// compute_timeout = "30s"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The socket address to listen on.
    #[serde(default = "ADDRESS_DEFAULT")]
    pub address: SocketAddr,

    /// The routes to expose.
    #[serde(default)]
    pub layout: RouteLayout,

    /// Whether computations are recorded and served at `/debug/profile`.
    #[serde(default = "PROFILING_DEFAULT")]
    pub profiling: bool,

    /// An upper bound on how long a request waits for its computation.
    ///
    /// There is no bound unless one is configured.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_duration",
        serialize_with = "serialize_optional_duration"
    )]
    pub compute_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            address: ADDRESS_DEFAULT(),
            layout: RouteLayout::default(),
            profiling: PROFILING_DEFAULT(),
            compute_timeout: None,
        }
    }
}

impl Config {
    /// Load a `Config` struct instance from a TOML file at the provided path.
    pub fn from_file<F: FileOperations>(path: &Path, fs: &F) -> Result<Config> {
        toml::from_str(&fs.read_utf8(path)?).with_context(ctx!(
          "Could not parse {path:?}", ;
          "See the README for the keys a {PRIMARY_STYLE}fibload.toml{PRIMARY_STYLE:#} may contain",
        ))
    }

    /// Load the config, tolerating a missing file only when `explicit` is
    /// false, in which case the defaults are used.
    pub fn load<F: FileOperations>(path: &Path, explicit: bool, fs: &F) -> Result<Config> {
        if !explicit && !fs.exists(path) {
            debug!("No config at {path:?}, using the defaults");
            return Ok(Config::default());
        }

        debug!("Reading the config: {path:?}");
        Config::from_file(path, fs)
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
