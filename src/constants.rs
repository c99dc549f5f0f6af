//! Constants used throughout the scaffold application

use std::time::Duration;

/// Package manager binary driving every install step
pub const NPM: &str = "npm";

/// Package runner used for tool initializers
pub const NPX: &str = "npx";

/// Vite template selector passed to the bootstrap command
pub const VITE_TEMPLATE: &str = "react-ts";

/// Manifest file produced by the bootstrap command
pub const MANIFEST_FILE: &str = "package.json";

/// Root directory for generated UI components
pub const COMPONENTS_DIR: &str = "src/components";

/// Atomic design tiers, ordered by composition complexity
pub const ATOMIC_TIERS: &[&str] = &["atoms", "molecules", "organisms", "templates", "pages"];

/// Top-level feature and app-state directories
pub const FEATURES_DIR: &str = "src/features";
pub const APP_DIR: &str = "src/app";

/// How long to wait for the manifest to become readable
pub const DEFAULT_MANIFEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Pause between manifest readiness checks
pub const DEFAULT_MANIFEST_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Banner printed before the run starts
pub const BANNER: &str = r"
  ██████╗ ██████╗ ██████╗ ██████╗ ███████╗██████╗
  ██╔══██╗██╔══██╗██╔══██╗██╔══██╗██╔════╝██╔══██╗
  ██║  ██║██████╔╝██████╔╝██║  ██║█████╗  ██████╔╝
  ██║  ██║██╔═══╝ ██╔═══╝ ██║  ██║██╔══╝  ██╔══██╗
  ██████╔╝██║     ██║     ██████╔╝███████╗██║  ██║
  ╚═════╝ ╚═╝     ╚═╝     ╚═════╝ ╚══════╝╚═╝  ╚═╝
";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
