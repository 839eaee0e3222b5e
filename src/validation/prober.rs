//! Dependency probing via the platform's link-inspection tool.
//!
//! One probe asks the dynamic linker which dependencies of a single binary
//! are unsatisfied. A file the tool cannot process (unreadable, foreign
//! architecture, not a dynamic binary) yields an empty list rather than an
//! error: an unprobeable file must never be reported as missing
//! dependencies, and must never abort the batch.

use crate::shell;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A line reports an unresolved dependency iff it ends with this marker...
const UNRESOLVED_MARKER: &str = "not found";
/// ...and contains this separator; the name is everything before it.
const RESOLUTION_SEPARATOR: &str = "=>";

/// Probes one binary for unresolved dynamic-link dependencies.
pub trait DependencyProber: Sync {
    /// Dependency names the linker reports as unresolved for `binary`.
    fn missing_dependencies(&self, binary: &Path) -> Vec<String>;
}

/// Extract unresolved dependency names from link-inspection output.
///
/// Extraction is insensitive to surrounding whitespace and preserves the
/// case of the extracted names.
pub fn parse_missing_deps(stdout: &str) -> Vec<String> {
    let mut missing = Vec::new();
    for line in stdout.lines() {
        let line = line.trim();
        if !line.ends_with(UNRESOLVED_MARKER) {
            continue;
        }
        let Some((name, _)) = line.split_once(RESOLUTION_SEPARATOR) else {
            continue;
        };
        let name = name.trim();
        if !name.is_empty() {
            missing.push(name.to_string());
        }
    }
    missing
}

/// Linux prober: `ldd` with an augmented `LD_LIBRARY_PATH`.
///
/// Extracted names keep their case verbatim.
pub struct LddProber {
    tool: PathBuf,
    search_dirs: Vec<PathBuf>,
}

impl LddProber {
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self {
            tool: PathBuf::from("ldd"),
            search_dirs,
        }
    }

    /// Substitute the inspection tool (used by tests).
    pub fn with_tool(mut self, tool: impl Into<PathBuf>) -> Self {
        self.tool = tool.into();
        self
    }

    fn library_path(&self) -> OsString {
        augmented_path(std::env::var_os("LD_LIBRARY_PATH"), &self.search_dirs)
    }
}

impl DependencyProber for LddProber {
    fn missing_dependencies(&self, binary: &Path) -> Vec<String> {
        let library_path = self.library_path();
        let result = shell::run_capture(
            &self.tool,
            &[binary.as_os_str()],
            None,
            &[("LD_LIBRARY_PATH", library_path.as_os_str())],
        );
        match result {
            Ok(out) if out.success => parse_missing_deps(&out.stdout),
            Ok(out) => {
                tracing::debug!(binary = %binary.display(), code = ?out.exit_code, "link inspection failed, skipping file");
                Vec::new()
            }
            Err(err) => {
                tracing::debug!(binary = %binary.display(), %err, "link inspection tool unavailable, skipping file");
                Vec::new()
            }
        }
    }
}

/// Windows prober: a bundled dependency-walking executable, run in the
/// probed file's own directory with an augmented `PATH`.
///
/// Extracted names are lower-cased; Windows library names are
/// case-insensitive by convention.
pub struct PrintDepsProber {
    tool: PathBuf,
    search_dirs: Vec<PathBuf>,
}

impl PrintDepsProber {
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self {
            tool: default_walker_path(),
            search_dirs,
        }
    }

    /// Substitute the walker executable (used by tests).
    pub fn with_tool(mut self, tool: impl Into<PathBuf>) -> Self {
        self.tool = tool.into();
        self
    }

    fn library_path(&self) -> OsString {
        augmented_path(std::env::var_os("PATH"), &self.search_dirs)
    }
}

impl DependencyProber for PrintDepsProber {
    fn missing_dependencies(&self, binary: &Path) -> Vec<String> {
        let library_path = self.library_path();
        let result = shell::run_capture(
            &self.tool,
            &[binary.as_os_str()],
            binary.parent(),
            &[("PATH", library_path.as_os_str())],
        );
        match result {
            Ok(out) if out.success => parse_missing_deps(&out.stdout)
                .into_iter()
                .map(|name| name.to_lowercase())
                .collect(),
            Ok(out) => {
                tracing::debug!(binary = %binary.display(), code = ?out.exit_code, "dependency walker failed, skipping file");
                Vec::new()
            }
            Err(err) => {
                tracing::debug!(binary = %binary.display(), %err, "dependency walker unavailable, skipping file");
                Vec::new()
            }
        }
    }
}

/// The dependency walker ships next to the hostdeps executable.
fn default_walker_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("PrintDeps.exe")))
        .unwrap_or_else(|| PathBuf::from("PrintDeps.exe"))
}

/// Join the caller's pre-existing search path (first) with the extra
/// search directories (second). The inherited environment is read, never
/// written.
fn augmented_path(inherited: Option<OsString>, search_dirs: &[PathBuf]) -> OsString {
    let mut parts: Vec<PathBuf> = inherited
        .map(|value| std::env::split_paths(&value).collect())
        .unwrap_or_default();
    parts.extend(search_dirs.iter().cloned());
    std::env::join_paths(parts).unwrap_or_default()
}
