//! Linux platform policy.
//!
//! Probing goes through `ldd`, dynamic-load checks through `ldconfig -p`,
//! and classification maps missing library names onto apt packages via the
//! catalog. There is no warn-only path on Linux: a non-empty missing set is
//! always fatal.

use super::{PlatformPolicy, RemediationContext};
use crate::catalog::{Catalog, DependencyGroup};
use crate::host::distro::{self, DistroInfo};
use crate::validation::ldcache::{self, DynamicLoadCheck};
use crate::validation::outcome::ValidationOutcome;
use crate::validation::prober::{DependencyProber, LddProber};
use crate::validation::scanner::ScanRules;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub struct LinuxPolicy {
    distro: Option<DistroInfo>,
    ldd: PathBuf,
    ldconfig: PathBuf,
}

impl LinuxPolicy {
    /// Policy for the running host.
    pub fn detect() -> Self {
        let distro = distro::detect();
        match &distro {
            Some(info) => tracing::debug!(platform = %info.platform_id(), "detected distribution"),
            None => tracing::debug!("could not determine the Linux distribution"),
        }
        Self {
            distro,
            ldd: PathBuf::from("ldd"),
            ldconfig: PathBuf::from("ldconfig"),
        }
    }

    /// Policy for a fixed distribution (used by tests).
    pub fn with_distro(distro: Option<DistroInfo>) -> Self {
        Self {
            distro,
            ldd: PathBuf::from("ldd"),
            ldconfig: PathBuf::from("ldconfig"),
        }
    }

    /// Substitute the link-inspection tool (used by tests).
    pub fn with_ldd(mut self, tool: impl Into<PathBuf>) -> Self {
        self.ldd = tool.into();
        self
    }

    /// Substitute the cache-listing tool (used by tests).
    pub fn with_ldconfig(mut self, tool: impl Into<PathBuf>) -> Self {
        self.ldconfig = tool.into();
        self
    }
}

impl ScanRules for LinuxPolicy {
    fn is_shared_library(&self, file_name: &str) -> bool {
        file_name.ends_with(".so") || file_name.contains(".so.")
    }

    fn is_executable(&self, _path: &Path, metadata: &fs::Metadata) -> bool {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            metadata.permissions().mode() & 0o111 != 0
        }
        #[cfg(not(unix))]
        {
            let _ = metadata;
            false
        }
    }
}

impl PlatformPolicy for LinuxPolicy {
    fn name(&self) -> &'static str {
        "linux"
    }

    fn platform_id(&self) -> Option<String> {
        self.distro.as_ref().map(DistroInfo::platform_id)
    }

    fn prober(&self, search_dirs: &[PathBuf]) -> Box<dyn DependencyProber> {
        Box::new(LddProber::new(search_dirs.to_vec()).with_tool(self.ldd.clone()))
    }

    fn dynamic_load_libraries(&self, group: DependencyGroup) -> &'static [&'static str] {
        group.dynamic_load_libraries()
    }

    fn check_dynamic_libraries(&self, libraries: &[&str]) -> DynamicLoadCheck {
        ldcache::check_with_tool(libraries, &self.ldconfig)
    }

    fn classify(
        &self,
        missing: &BTreeSet<String>,
        catalog: &Catalog,
        ctx: &RemediationContext,
    ) -> ValidationOutcome {
        if missing.is_empty() {
            return ValidationOutcome::Satisfied;
        }

        let mapping = catalog.lib_to_package(self.platform_id().as_deref());
        let mut packages = BTreeSet::new();
        let mut unresolved = Vec::new();
        for library in missing {
            match mapping.get(library) {
                Some(package) => {
                    packages.insert(package.clone());
                }
                None => unresolved.push(library.clone()),
            }
        }

        let mut blocks = vec!["Host is missing dependencies to run browsers.".to_string()];
        if unresolved.is_empty() {
            blocks.push(format!(
                "Install missing packages with:\n    sudo {} install-deps",
                ctx.helper
            ));
        } else {
            if !packages.is_empty() {
                let list = packages.into_iter().collect::<Vec<_>>().join(" ");
                blocks.push(format!("Install missing packages with:\n    apt-get install {list}"));
            }
            let names = unresolved
                .iter()
                .map(|name| format!("    {name}"))
                .collect::<Vec<_>>()
                .join("\n");
            blocks.push(format!(
                "Missing libraries with no known package mapping:\n{names}"
            ));
        }

        ValidationOutcome::FatalMissingDependencies { blocks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ubuntu_policy() -> LinuxPolicy {
        LinuxPolicy::with_distro(Some(DistroInfo::new("ubuntu", "22.04")))
    }

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{
                "ubuntu22.04": {
                    "groups": { "chromium": ["libgtk-3-0"] },
                    "lib2package": {
                        "libgdk-3.so.0": "libgtk-3-0",
                        "libgtk-3.so.0": "libgtk-3-0",
                        "libnss3.so": "libnss3"
                    }
                }
            }"#,
        )
        .unwrap()
    }

    fn missing(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn empty_missing_set_is_satisfied() {
        let outcome = ubuntu_policy().classify(
            &BTreeSet::new(),
            &catalog(),
            &RemediationContext::default(),
        );
        assert_eq!(outcome, ValidationOutcome::Satisfied);
    }

    #[test]
    fn fully_resolved_set_recommends_the_install_helper() {
        let outcome = ubuntu_policy().classify(
            &missing(&["libgtk-3.so.0"]),
            &catalog(),
            &RemediationContext::default(),
        );

        let ValidationOutcome::FatalMissingDependencies { blocks } = outcome else {
            panic!("expected fatal outcome");
        };
        let message = blocks.join("\n");
        assert!(message.contains("sudo hostdeps install-deps"));
        assert!(!message.contains("apt-get"));
    }

    #[test]
    fn partially_resolved_set_lists_apt_command_and_raw_names() {
        let outcome = ubuntu_policy().classify(
            &missing(&["libgtk-3.so.0", "libweird.so.9"]),
            &catalog(),
            &RemediationContext::default(),
        );

        let ValidationOutcome::FatalMissingDependencies { blocks } = outcome else {
            panic!("expected fatal outcome");
        };
        let message = blocks.join("\n");
        assert!(message.contains("apt-get install libgtk-3-0"));
        assert!(message.contains("libweird.so.9"));
    }

    #[test]
    fn nothing_resolved_lists_raw_names_without_apt_command() {
        let outcome = ubuntu_policy().classify(
            &missing(&["libweird.so.9"]),
            &catalog(),
            &RemediationContext::default(),
        );

        let message = outcome.message().unwrap();
        assert!(!message.contains("apt-get"));
        assert!(message.contains("libweird.so.9"));
    }

    #[test]
    fn unknown_distro_falls_back_to_override_mapping_only() {
        let policy = LinuxPolicy::with_distro(None);
        let outcome = policy.classify(
            &missing(&["libgstlibav.so", "libgtk-3.so.0"]),
            &catalog(),
            &RemediationContext::default(),
        );

        let message = outcome.message().unwrap();
        // override-backed entry resolves, catalog-backed one cannot
        assert!(message.contains("apt-get install gstreamer1.0-libav"));
        assert!(message.contains("libgtk-3.so.0"));
    }

    #[test]
    fn helper_name_is_parameterized() {
        let ctx = RemediationContext {
            helper: "browserctl".to_string(),
        };
        let outcome = ubuntu_policy().classify(&missing(&["libgtk-3.so.0"]), &catalog(), &ctx);
        assert!(outcome
            .message()
            .unwrap()
            .contains("sudo browserctl install-deps"));
    }

    #[test]
    fn libraries_resolving_to_one_package_list_it_once() {
        let outcome = ubuntu_policy().classify(
            &missing(&["libgdk-3.so.0", "libgtk-3.so.0", "libweird.so.9"]),
            &catalog(),
            &RemediationContext::default(),
        );
        let message = outcome.message().unwrap();
        assert!(message.contains("apt-get install libgtk-3-0\n"));
        assert_eq!(message.matches("libgtk-3-0").count(), 1);
    }

    #[test]
    fn shared_library_naming_convention() {
        let policy = ubuntu_policy();
        assert!(policy.is_shared_library("libx.so"));
        assert!(policy.is_shared_library("libx.so.6.1"));
        assert!(!policy.is_shared_library("libx.dll"));
        assert!(!policy.is_shared_library("readme.txt"));
    }

    #[test]
    fn webkit_dynamic_load_list_is_exposed() {
        let policy = ubuntu_policy();
        assert!(policy
            .dynamic_load_libraries(DependencyGroup::Webkit)
            .contains(&"libx264.so"));
        assert!(policy
            .dynamic_load_libraries(DependencyGroup::Chromium)
            .is_empty());
    }
}
