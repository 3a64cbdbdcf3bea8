//! The core of `fibload`, shared between the server and `showfib`.

/// The (intentionally naive) Fibonacci computations.
pub mod fibonacci;

/// A struct and related methods for the server configuration.
pub mod config;

/// Timing and resource usage of instrumented computations.
pub mod measurement;

/// Common file operations
pub mod file_system;

/// The error handling for `fibload`.
pub mod error;

/// Constant values.
pub mod constants;

/// Helper functions for testing, only compiled in test mode.
#[cfg(test)]
mod test_utils;
