//! Run configuration injected into the runner.
//!
//! Nothing here is process-global: colors and the banner are carried by
//! [`Presentation`] so a test can run the whole flow silently.

use std::fmt::Display;
use std::time::Duration;

use colored::Colorize;

use crate::constants::{BANNER, DEFAULT_MANIFEST_POLL_INTERVAL, DEFAULT_MANIFEST_TIMEOUT};
use crate::plan::Stage;

/// Polling bounds for the manifest readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestWait {
    pub timeout: Duration,
    pub interval: Duration,
}

impl Default for ManifestWait {
    fn default() -> Self {
        Self { timeout: DEFAULT_MANIFEST_TIMEOUT, interval: DEFAULT_MANIFEST_POLL_INTERVAL }
    }
}

/// Console output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub color: bool,
    pub banner: bool,
    /// When false nothing is printed; errors are still returned to the caller.
    pub enabled: bool,
}

impl Default for Presentation {
    fn default() -> Self {
        Self { color: true, banner: true, enabled: true }
    }
}

impl Presentation {
    /// No output at all.
    pub fn silent() -> Self {
        Self { color: false, banner: false, enabled: false }
    }

    fn paint<F>(&self, text: &str, style: F) -> String
    where
        F: FnOnce(&str) -> colored::ColoredString,
    {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn welcome(&self) {
        if !self.enabled {
            return;
        }
        if self.banner {
            println!("{}", self.paint(BANNER, |s| s.bright_green().bold()));
        }
        println!(
            "{}\n",
            self.paint("Welcome to the Project Setup CLI!", |s| s.bright_blue().bold())
        );
    }

    pub fn stage(&self, stage: Stage) {
        if self.enabled {
            println!("{} {}", self.paint("→", |s| s.cyan().bold()), stage);
        }
    }

    pub fn note(&self, message: impl Display) {
        if self.enabled {
            println!("  {message}");
        }
    }

    pub fn success(&self, message: impl Display) {
        if self.enabled {
            println!("{}\n", self.paint(&message.to_string(), |s| s.green()));
        }
    }

    pub fn failure(&self, message: impl Display) {
        if self.enabled {
            eprintln!("{}", self.paint(&message.to_string(), |s| s.yellow()));
        }
    }
}

/// Everything the runner needs besides the project name.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub presentation: Presentation,
    pub manifest_wait: ManifestWait,
    /// Print the plan instead of executing it.
    pub dry_run: bool,
}
