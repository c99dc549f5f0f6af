/// Handles argument parsing and drives a scaffold run.
pub mod cli;

/// Run configuration and console presentation.
pub mod config;

/// Constants shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Runs external commands.
pub mod executor;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Patching of the generated package manifest.
pub mod manifest;

/// The ordered list of scaffold steps.
pub mod plan;

/// Project-name interpolation.
pub mod renderer;

/// Literal scaffold content and step definitions.
pub mod template;
