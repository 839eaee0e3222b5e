//! Binary candidate scanner.
//!
//! Walks an artifact directory and collects every regular file worth
//! probing: shared libraries by platform naming convention, and files with
//! execute permission (or the platform equivalent). Any stat failure fails
//! the whole scan: a partial candidate list would produce a false "all
//! dependencies satisfied" result.

use crate::error::{HostdepsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Platform naming conventions for candidate selection. Implemented by the
/// active platform policy.
pub trait ScanRules {
    /// Whether `file_name` follows the platform's shared-library naming
    /// convention.
    fn is_shared_library(&self, file_name: &str) -> bool;

    /// Whether the file at `path` is independently executable.
    fn is_executable(&self, path: &Path, metadata: &fs::Metadata) -> bool;
}

/// Collect the absolute paths of every probe candidate under `dir`.
///
/// The walk is recursive and deterministic (entries sorted by name).
pub fn scan_binaries(dir: &Path, rules: &dyn ScanRules) -> Result<Vec<PathBuf>> {
    let root = dir
        .canonicalize()
        .map_err(|source| scan_failed(dir, source))?;
    let mut candidates = Vec::new();
    walk(&root, rules, &mut candidates)?;
    Ok(candidates)
}

fn walk(dir: &Path, rules: &dyn ScanRules, out: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .map_err(|source| scan_failed(dir, source))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|source| scan_failed(dir, source))?;
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|source| scan_failed(&path, source))?;
        if file_type.is_dir() {
            walk(&path, rules, out)?;
            continue;
        }

        // Follows symlinks: a link to a regular file is probeable, a link
        // to a directory is not a regular file and falls out here.
        let metadata = fs::metadata(&path).map_err(|source| scan_failed(&path, source))?;
        if !metadata.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        if rules.is_shared_library(&file_name) || rules.is_executable(&path, &metadata) {
            out.push(path);
        }
    }
    Ok(())
}

fn scan_failed(path: &Path, source: std::io::Error) -> HostdepsError {
    HostdepsError::ScanFailed {
        path: path.to_path_buf(),
        source,
    }
}
