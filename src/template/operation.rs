use std::path::PathBuf;

use crate::executor::CommandSpec;
use crate::manifest::ManifestPatch;

/// A single declarative scaffold step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Run(CommandSpec),
    MakeDir(PathBuf),
    WriteFile { target: PathBuf, content: &'static str },
    AwaitManifest(PathBuf),
    PatchManifest { target: PathBuf, patch: ManifestPatch },
}

impl Step {
    /// Gets a message describing the step.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (nothing is executed)
    ///
    /// # Returns
    /// * `String` - A descriptive message about the step
    pub fn describe(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            Step::Run(command) => {
                format!("{}Running `{}` in '{}'", prefix, command, command.working_dir.display())
            }
            Step::MakeDir(target) => {
                format!("{}Creating directory '{}'", prefix, target.display())
            }
            Step::WriteFile { target, .. } => {
                format!("{}Writing to '{}'", prefix, target.display())
            }
            Step::AwaitManifest(target) => {
                format!("{}Waiting for '{}' to become readable", prefix, target.display())
            }
            Step::PatchManifest { target, patch } => {
                let scripts: Vec<_> = patch.scripts.keys().map(String::as_str).collect();
                let fields: Vec<_> = patch.fields.keys().map(String::as_str).collect();
                format!(
                    "{}Patching '{}' (scripts: {}; fields: {})",
                    prefix,
                    target.display(),
                    scripts.join(", "),
                    fields.join(", ")
                )
            }
        }
    }
}
