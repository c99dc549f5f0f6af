use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Ensures nothing exists yet at the target path.
pub fn check_target<P: AsRef<Path>>(target: P) -> Result<PathBuf> {
    let target = target.as_ref();
    // symlink_metadata so that dangling links also count as existing entries
    if target.symlink_metadata().is_ok() {
        return Err(Error::TargetExists { target: target.to_path_buf() });
    }
    Ok(target.to_path_buf())
}

/// Creates the directory and any missing ancestors. No-op when it already exists.
pub fn ensure_dir<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(|source| Error::FilesystemWriteFailed {
        path: dest_path.to_path_buf(),
        source,
    })
}

/// Creates or overwrites a file with exactly `content`. The parent directory must exist.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::write(dest_path, content).map_err(|source| Error::FilesystemWriteFailed {
        path: dest_path.to_path_buf(),
        source,
    })
}
