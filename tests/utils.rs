#![allow(dead_code)]

use scaffold::config::{Config, ManifestWait, Presentation};
use scaffold::error::{Error, Result};
use scaffold::executor::{CommandExecutor, CommandSpec};
use std::fs;
use std::path::Path;
use std::process::ExitStatus;
use std::time::Duration;
use walkdir::WalkDir;

/// Manifest the fake bootstrap writes, shaped like the one Vite generates.
pub const BOOTSTRAP_MANIFEST: &str = r#"{
  "name": "app",
  "private": true,
  "version": "0.0.0",
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "tsc && vite build",
    "lint": "eslint src --ext ts,tsx",
    "preview": "vite preview"
  },
  "dependencies": {
    "react": "^18.2.0",
    "react-dom": "^18.2.0"
  }
}
"#;

/// Stylesheet the fake bootstrap writes; the scaffold must replace it.
pub const BOOTSTRAP_CSS: &str = ":root { color: black; }\n";

/// Number of external commands in a complete run.
pub const COMMAND_COUNT: usize = 11;

/// Stand-in for npm/npx/git that records every invocation.
///
/// The bootstrap command creates the project directory with a manifest, the
/// hook command creates the hook file, and the command at `fail_at` (if any)
/// fails with exit status 1.
#[derive(Debug, Default)]
pub struct FakeNpm {
    pub invocations: Vec<String>,
    fail_at: Option<usize>,
}

impl FakeNpm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(index: usize) -> Self {
        Self { invocations: Vec::new(), fail_at: Some(index) }
    }
}

#[cfg(unix)]
fn failed_status() -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(1 << 8)
}

#[cfg(windows)]
fn failed_status() -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(1)
}

impl CommandExecutor for FakeNpm {
    fn execute(&mut self, command: &CommandSpec) -> Result<()> {
        let index = self.invocations.len();
        self.invocations.push(command.to_string());

        if self.fail_at == Some(index) {
            return Err(Error::ExternalCommandFailed {
                command: command.to_string(),
                working_dir: command.working_dir.clone(),
                status: failed_status(),
            });
        }

        let args: Vec<&str> = command.args.iter().map(String::as_str).collect();
        match (command.program.as_str(), args.as_slice()) {
            ("npm", ["init", "vite@latest", name, ..]) => {
                let root = command.working_dir.join(name);
                fs::create_dir_all(root.join("src"))?;
                fs::write(root.join("package.json"), BOOTSTRAP_MANIFEST)?;
                fs::write(root.join("src").join("index.css"), BOOTSTRAP_CSS)?;
                fs::write(root.join("src").join("main.tsx"), "import './index.css'\n")?;
            }
            ("git", ["init"]) => {
                fs::create_dir_all(command.working_dir.join(".git"))?;
            }
            ("npx", ["husky", "add", hook, script]) => {
                let hook = command.working_dir.join(hook);
                if let Some(parent) = hook.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(hook, format!("#!/bin/sh\n{script}\n"))?;
            }
            _ => {}
        }
        Ok(())
    }
}

/// Quiet configuration with a short manifest wait.
pub fn test_config() -> Config {
    Config {
        presentation: Presentation::silent(),
        manifest_wait: ManifestWait {
            timeout: Duration::from_millis(200),
            interval: Duration::from_millis(10),
        },
        dry_run: false,
    }
}

/// Copies a directory tree so it can be compared after a later run.
pub fn snapshot(source: &Path, dest: &Path) {
    for entry in WalkDir::new(source).into_iter().filter_map(|e| e.ok()) {
        let rel = entry.path().strip_prefix(source).unwrap();
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// Every path under `dir`, relative to it.
pub fn list_entries(dir: &Path) -> Vec<String> {
    let mut entries: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.path().strip_prefix(dir).unwrap().display().to_string())
        .collect();
    entries.sort();
    entries
}

/// Asserts two directory trees hold the same files with the same bytes.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    let different = dir_diff::is_different(actual, expected).unwrap();
    assert!(
        !different,
        "{} differs from {}: {:?} vs {:?}",
        actual.display(),
        expected.display(),
        list_entries(actual),
        list_entries(expected)
    );
}
