//! Read-modify-write patching of the generated `package.json`.

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::ManifestWait;
use crate::error::{Error, Result};

type Manifest = Map<String, Value>;

/// Hook manager configuration block.
#[derive(Debug, Clone, Serialize)]
struct HuskyConfig {
    hooks: IndexMap<String, String>,
}

/// Additions merged into an existing manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestPatch {
    /// Entries added to (or replacing entries in) the `scripts` object
    pub scripts: IndexMap<String, String>,
    /// Top-level keys, replacing any existing key of the same name
    pub fields: IndexMap<String, Value>,
}

impl Default for ManifestPatch {
    /// Lint/format scripts, the pre-commit hook and the lint-staged block.
    fn default() -> Self {
        let scripts = IndexMap::from([
            ("prepare".to_string(), "husky install".to_string()),
            ("lint".to_string(), "eslint --fix .".to_string()),
            ("format".to_string(), "prettier --write .".to_string()),
        ]);

        let husky = HuskyConfig {
            hooks: IndexMap::from([("pre-commit".to_string(), "lint-staged".to_string())]),
        };
        let lint_staged = IndexMap::from([(
            "*.{js,jsx,ts,tsx}".to_string(),
            vec!["npm run lint".to_string(), "npm run format".to_string()],
        )]);

        let fields = IndexMap::from([
            ("husky".to_string(), to_value(&husky)),
            ("lint-staged".to_string(), to_value(&lint_staged)),
        ]);

        Self { scripts, fields }
    }
}

fn to_value<T: Serialize>(value: &T) -> Value {
    // Plain string maps and structs always serialize.
    serde_json::to_value(value).unwrap_or(Value::Null)
}

impl ManifestPatch {
    /// Merges the patch into `manifest` without dropping unrelated keys.
    pub fn apply(&self, manifest: &mut Manifest) {
        let scripts = manifest
            .entry("scripts")
            .or_insert_with(|| Value::Object(Map::new()));
        if !scripts.is_object() {
            log::warn!("Manifest `scripts` is not an object, replacing it");
            *scripts = Value::Object(Map::new());
        }
        if let Value::Object(scripts) = scripts {
            for (name, command) in &self.scripts {
                scripts.insert(name.clone(), Value::String(command.clone()));
            }
        }

        for (key, value) in &self.fields {
            manifest.insert(key.clone(), value.clone());
        }
    }
}

fn read_manifest(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|source| Error::ManifestParseError { path: path.to_path_buf(), source })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::ManifestParseError {
            path: path.to_path_buf(),
            source: serde::de::Error::custom("expected a JSON object"),
        }),
    }
}

/// Blocks until the manifest exists and parses, or the wait times out.
pub fn await_manifest(path: &Path, wait: &ManifestWait) -> Result<()> {
    let started = Instant::now();
    loop {
        match read_manifest(path) {
            Ok(_) => {
                log::debug!("Manifest {} ready after {:?}", path.display(), started.elapsed());
                return Ok(());
            }
            Err(e) => log::debug!("Manifest {} not ready: {e}", path.display()),
        }

        let waited = started.elapsed();
        if waited >= wait.timeout {
            return Err(Error::ManifestUnavailable { path: path.to_path_buf(), waited });
        }
        thread::sleep(wait.interval.min(wait.timeout - waited).max(Duration::from_millis(1)));
    }
}

/// Reads the manifest, applies the patch and writes it back pretty-printed.
pub fn patch_manifest(path: &Path, patch: &ManifestPatch) -> Result<()> {
    let mut manifest = read_manifest(path)?;
    patch.apply(&mut manifest);

    let mut content = serde_json::to_string_pretty(&manifest)
        .map_err(|source| Error::ManifestParseError { path: path.to_path_buf(), source })?;
    content.push('\n');

    crate::ioutils::write_file(&content, path)
}
