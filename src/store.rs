//! Loading and saving the manifest file, with a single-copy backup.
//!
//! A load either yields the full document or fails; no partial tree is ever
//! returned. Saves optionally copy the current file bytes to `<path>.backup`
//! first, and a backup failure aborts the save before the target is touched.
use crate::manifest::Manifest;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Suffix appended to the manifest path for the backup copy.
pub const BACKUP_SUFFIX: &str = ".backup";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("manifest not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("malformed manifest {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where a save landed, including the backup copy when one was written.
#[derive(Debug)]
pub struct SaveOutcome {
    pub backup: Option<PathBuf>,
}

/// Read and parse the full manifest at `path`.
pub fn load(path: &Path) -> Result<Manifest, StoreError> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
        _ => StoreError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    })?;
    let manifest = serde_json::from_str(&content).map_err(|err| StoreError::Parse {
        path: path.to_path_buf(),
        source: err,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded manifest");
    Ok(manifest)
}

/// Serialize `manifest` to `path`, fully replacing prior content.
///
/// With `make_backup` set and a file already present, the current bytes are
/// first copied verbatim to [`backup_path`], overwriting any prior backup.
pub fn save(
    manifest: &Manifest,
    path: &Path,
    make_backup: bool,
) -> Result<SaveOutcome, StoreError> {
    let mut backup = None;
    if make_backup && path.exists() {
        let target = backup_path(path);
        fs::copy(path, &target).map_err(|err| StoreError::Write {
            path: target.clone(),
            source: err,
        })?;
        tracing::debug!(path = %target.display(), "wrote backup copy");
        backup = Some(target);
    }

    // serde_json's pretty formatter gives the 2-space indentation the registry
    // format uses, and writes non-ASCII characters unescaped.
    let mut json = serde_json::to_string_pretty(manifest).map_err(|err| StoreError::Write {
        path: path.to_path_buf(),
        source: io::Error::other(err),
    })?;
    json.push('\n');
    fs::write(path, json).map_err(|err| StoreError::Write {
        path: path.to_path_buf(),
        source: err,
    })?;
    Ok(SaveOutcome { backup })
}

/// Sibling backup path for a manifest path (`index.json` -> `index.json.backup`).
pub fn backup_path(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(BACKUP_SUFFIX);
    PathBuf::from(raw)
}
