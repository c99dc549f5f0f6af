use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

use crate::config::Presentation;
use crate::constants::exit_codes;
use crate::plan::Stage;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Please supply a project name.")]
    MissingArgument,

    #[error("Cannot proceed: '{}' already exists. Choose a different name.", .target.display())]
    TargetExists { target: PathBuf },

    /// When the command has executed but finished with an error.
    #[error("Error executing `{command}` in '{}': {status}", .working_dir.display())]
    ExternalCommandFailed { command: String, working_dir: PathBuf, status: ExitStatus },

    /// When the command could not be started at all, e.g. it is not on PATH.
    #[error("Failed to start `{command}`. Original error: {source}")]
    CommandSpawnError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot run `{command}`: working directory '{}' does not exist.", .working_dir.display())]
    WorkingDirectoryMissing { command: String, working_dir: PathBuf },

    #[error("Failed to write '{}'. Original error: {source}", .path.display())]
    FilesystemWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest '{}' was not readable after {waited:?}.", .path.display())]
    ManifestUnavailable { path: PathBuf, waited: Duration },

    #[error("Failed to parse manifest '{}'. Original error: {source}", .path.display())]
    ManifestParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("{stage} failed. {source}")]
    StageFailed {
        stage: Stage,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Process exit code for this error. Every failure is fatal.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }

    /// Wraps the error with the stage it happened in.
    pub fn in_stage(self, stage: Stage) -> Self {
        match self {
            err @ Error::StageFailed { .. } => err,
            err => Error::StageFailed { stage, source: Box::new(err) },
        }
    }
}

/// Convenience type alias for Results with the crate Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
/// * `presentation` - Console settings used to print it
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error, presentation: &Presentation) {
    presentation.failure(&err);
    std::process::exit(err.exit_code());
}
