use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// One external invocation: the program, its arguments and where to run it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl CommandSpec {
    pub fn new<I, S>(program: &str, args: I, working_dir: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: working_dir.to_path_buf(),
        }
    }
}

impl Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Trait for running external commands.
pub trait CommandExecutor {
    /// Runs the command to completion.
    ///
    /// # Returns
    /// * `Result<()>` - Ok on a zero exit status, an error otherwise
    fn execute(&mut self, command: &CommandSpec) -> Result<()>;
}

/// Launcher prepended to every command. On Windows `npm` and `npx` are
/// `.cmd` shims that only the command interpreter resolves.
#[cfg(windows)]
const LAUNCHER: &[&str] = &["cmd", "/C"];
#[cfg(not(windows))]
const LAUNCHER: &[&str] = &[];

/// Builds the process for `command`, going through [`LAUNCHER`] when there is one.
fn build_command(command: &CommandSpec) -> Command {
    let mut cmd = match LAUNCHER.split_first() {
        Some((launcher, launcher_args)) => {
            let mut cmd = Command::new(launcher);
            cmd.args(launcher_args.iter()).arg(&command.program);
            cmd
        }
        None => Command::new(&command.program),
    };
    cmd.args(&command.args).current_dir(&command.working_dir);
    cmd
}

/// Runs commands as child processes sharing this process's stdin, stdout and stderr.
#[derive(Debug, Default)]
pub struct ProcessExecutor;

impl CommandExecutor for ProcessExecutor {
    fn execute(&mut self, command: &CommandSpec) -> Result<()> {
        log::debug!("Running `{}` in {}", command, command.working_dir.display());

        let status = build_command(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::CommandSpawnError {
                command: command.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(Error::ExternalCommandFailed {
                command: command.to_string(),
                working_dir: command.working_dir.clone(),
                status,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let spec = CommandSpec::new(
            "npx",
            ["husky", "add", ".husky/pre-commit", "npm run lint-staged"],
            Path::new("."),
        );
        assert_eq!(spec.to_string(), "npx husky add .husky/pre-commit \"npm run lint-staged\"");
    }

    fn argv(cmd: &Command) -> Vec<String> {
        std::iter::once(cmd.get_program())
            .chain(cmd.get_args())
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[cfg(not(windows))]
    #[test]
    fn build_command_spawns_program_directly() {
        let spec = CommandSpec::new("npm", ["install", "husky"], Path::new("/tmp/app"));
        let cmd = build_command(&spec);
        assert_eq!(argv(&cmd), ["npm", "install", "husky"]);
        assert_eq!(cmd.get_current_dir(), Some(Path::new("/tmp/app")));
    }

    #[cfg(windows)]
    #[test]
    fn build_command_goes_through_cmd_on_windows() {
        let spec = CommandSpec::new(
            "npx",
            ["husky", "add", ".husky/pre-commit", "npm run lint-staged"],
            Path::new("C:\\app"),
        );
        let cmd = build_command(&spec);
        assert_eq!(
            argv(&cmd),
            ["cmd", "/C", "npx", "husky", "add", ".husky/pre-commit", "npm run lint-staged"]
        );
        assert_eq!(cmd.get_current_dir(), Some(Path::new("C:\\app")));
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_working_directory() {
        let temp_dir = TempDir::new().unwrap();
        let spec = CommandSpec::new("sh", ["-c", "touch marker"], temp_dir.path());

        ProcessExecutor.execute(&spec).expect("command should succeed");

        assert!(temp_dir.path().join("marker").exists());
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let spec = CommandSpec::new("sh", ["-c", "exit 3"], temp_dir.path());

        let err = ProcessExecutor.execute(&spec).unwrap_err();

        match err {
            Error::ExternalCommandFailed { command, working_dir, status } => {
                assert_eq!(command, "sh -c \"exit 3\"");
                assert_eq!(working_dir, temp_dir.path());
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let temp_dir = TempDir::new().unwrap();
        let spec = CommandSpec::new(
            "definitely-not-a-real-program-4f1c",
            Vec::<String>::new(),
            temp_dir.path(),
        );

        let err = ProcessExecutor.execute(&spec).unwrap_err();
        assert!(matches!(err, Error::CommandSpawnError { .. }));
    }
}
