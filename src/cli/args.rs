use crate::config::{Config, Presentation};
use crate::constants::verbosity;
use clap::Parser;
use log::LevelFilter;

/// CLI arguments for scaffold.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the project directory to create.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the steps without running commands or touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Disable colored output and the banner.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Args {
    /// Run configuration derived from the flags.
    pub fn config(&self) -> Config {
        let presentation = Presentation {
            color: !self.no_color,
            banner: !self.no_color,
            ..Presentation::default()
        };
        Config { presentation, dry_run: self.dry_run, ..Config::default() }
    }
}

/// Parse command line arguments.
///
/// The project name is optional here so that a missing name is reported by
/// the runner with the regular failure exit code.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
