//! Windows platform policy.
//!
//! Probing goes through the bundled dependency walker; classification
//! partitions missing DLL names into the C-runtime and Media Foundation
//! remediation families. Missing dependencies are fatal on a supported
//! Windows version and a warning below the support floor; on an
//! unsupported OS the validator declines to block.

use super::{PlatformPolicy, RemediationContext};
use crate::catalog::{Catalog, DependencyGroup};
use crate::host::windows_version::{self, WindowsVersion};
use crate::validation::ldcache::DynamicLoadCheck;
use crate::validation::outcome::ValidationOutcome;
use crate::validation::prober::{DependencyProber, PrintDepsProber};
use crate::validation::scanner::ScanRules;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Universal C Runtime DLLs: the forwarder prefix plus the redistributable
/// runtime DLLs themselves.
const CRT_PREFIX: &str = "api-ms-win-crt";
const CRT_LIBRARIES: &[&str] = &["vcruntime140.dll", "vcruntime140_1.dll", "msvcp140.dll"];

/// Media Foundation DLLs, absent on Server installs without the feature.
const MEDIA_LIBRARIES: &[&str] = &[
    "mf.dll",
    "mfplat.dll",
    "msmpeg2vdec.dll",
    "evr.dll",
    "avrt.dll",
];

pub struct WindowsPolicy {
    version: Option<WindowsVersion>,
    arch: &'static str,
}

impl WindowsPolicy {
    /// Policy for the running host.
    pub fn detect() -> Self {
        Self {
            version: windows_version::detect(),
            arch: std::env::consts::ARCH,
        }
    }

    /// Policy for a fixed version and architecture (used by tests).
    pub fn with_host(version: Option<WindowsVersion>, arch: &'static str) -> Self {
        Self { version, arch }
    }

    /// Supported iff running on x86_64 above the Windows 7 version floor.
    pub fn is_supported_platform(&self) -> bool {
        self.arch == "x86_64" && self.version.is_some_and(|v| v.is_supported())
    }
}

fn is_crt_library(name: &str) -> bool {
    name.starts_with(CRT_PREFIX) || CRT_LIBRARIES.contains(&name)
}

fn is_media_library(name: &str) -> bool {
    MEDIA_LIBRARIES.contains(&name)
}

impl ScanRules for WindowsPolicy {
    fn is_shared_library(&self, file_name: &str) -> bool {
        file_name.to_lowercase().ends_with(".dll")
    }

    fn is_executable(&self, path: &Path, _metadata: &fs::Metadata) -> bool {
        path.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("exe"))
    }
}

impl PlatformPolicy for WindowsPolicy {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn platform_id(&self) -> Option<String> {
        self.version.map(|v| format!("win{}.{}", v.major, v.minor))
    }

    fn prober(&self, search_dirs: &[PathBuf]) -> Box<dyn DependencyProber> {
        Box::new(PrintDepsProber::new(search_dirs.to_vec()))
    }

    fn dynamic_load_libraries(&self, _group: DependencyGroup) -> &'static [&'static str] {
        &[]
    }

    fn check_dynamic_libraries(&self, _libraries: &[&str]) -> DynamicLoadCheck {
        DynamicLoadCheck::default()
    }

    fn classify(
        &self,
        missing: &BTreeSet<String>,
        _catalog: &Catalog,
        _ctx: &RemediationContext,
    ) -> ValidationOutcome {
        if missing.is_empty() {
            return ValidationOutcome::Satisfied;
        }

        let mut blocks = vec!["Host is missing dependencies to run browsers.".to_string()];
        if missing.iter().any(|name| is_crt_library(name)) {
            blocks.push(
                "Some of the Universal C Runtime files are missing. Install the Microsoft \
                 Visual C++ Redistributable:\n    https://aka.ms/vs/17/release/vc_redist.x64.exe"
                    .to_string(),
            );
        }
        if missing.iter().any(|name| is_media_library(name)) {
            blocks.push(
                "Some of the Media Foundation files are missing. On Windows Server, install \
                 the Media Foundation feature:\n    Install-WindowsFeature Server-Media-Foundation"
                    .to_string(),
            );
        }
        let names = missing
            .iter()
            .map(|name| format!("    {name}"))
            .collect::<Vec<_>>()
            .join("\n");
        blocks.push(format!("Full list of missing libraries:\n{names}"));

        if self.is_supported_platform() {
            ValidationOutcome::FatalMissingDependencies { blocks }
        } else {
            ValidationOutcome::WarnedUnsupportedPlatform { blocks }
        }
    }
}
