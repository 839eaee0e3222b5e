//! Native dependency catalog.
//!
//! The catalog is an embedded JSON document keyed by platform identifier
//! (e.g. `ubuntu22.04`). Each platform entry carries the per-group package
//! lists used by the installer and the library→package mapping used by the
//! classifier. The core never mutates the catalog; a missing platform key
//! means "no information", not an error.

pub mod groups;
pub mod overrides;

pub use groups::DependencyGroup;

use crate::error::Result;
use anyhow::Context;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

const NATIVE_DEPS_JSON: &str = include_str!("native_deps.json");

/// Dependency information for one platform identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformDeps {
    /// Package lists per dependency group.
    pub groups: BTreeMap<String, Vec<String>>,
    /// Library filename → distribution package providing it.
    pub lib2package: BTreeMap<String, String>,
}

/// The full dependency catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    platforms: BTreeMap<String, PlatformDeps>,
}

impl Catalog {
    /// Load the embedded catalog.
    pub fn load() -> Result<Self> {
        Self::from_json(NATIVE_DEPS_JSON)
    }

    /// Parse a catalog from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog =
            serde_json::from_str(json).context("dependency catalog is malformed")?;
        Ok(catalog)
    }

    /// Look up the entry for a platform identifier.
    pub fn platform(&self, platform_id: &str) -> Option<&PlatformDeps> {
        self.platforms.get(platform_id)
    }

    /// Platform identifiers the catalog has information for.
    pub fn known_platforms(&self) -> impl Iterator<Item = &str> {
        self.platforms.keys().map(String::as_str)
    }

    /// Deduplicated union of the package lists for `groups` on a platform.
    ///
    /// `None` when the catalog has no information for `platform_id`.
    pub fn packages_for(
        &self,
        platform_id: &str,
        groups: &[DependencyGroup],
    ) -> Option<BTreeSet<String>> {
        let platform = self.platform(platform_id)?;
        let mut packages = BTreeSet::new();
        for group in groups {
            if let Some(list) = platform.groups.get(group.as_str()) {
                packages.extend(list.iter().cloned());
            }
        }
        Some(packages)
    }

    /// Effective library→package mapping for a platform: the catalog's
    /// mapping (empty when the platform is unknown) with the manual
    /// override table applied on top. Override entries replace catalog
    /// entries with the same key.
    pub fn lib_to_package(&self, platform_id: Option<&str>) -> BTreeMap<String, String> {
        let mut mapping = platform_id
            .and_then(|id| self.platform(id))
            .map(|p| p.lib2package.clone())
            .unwrap_or_default();
        overrides::apply(&mut mapping);
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = Catalog::load().unwrap();
        assert!(catalog.platform("ubuntu22.04").is_some());
        assert!(catalog.platform("debian12").is_some());
        assert!(catalog.platform("arch").is_none());
    }

    #[test]
    fn every_platform_covers_all_groups() {
        let catalog = Catalog::load().unwrap();
        for id in catalog.known_platforms().collect::<Vec<_>>() {
            let platform = catalog.platform(id).unwrap();
            for group in DependencyGroup::ALL {
                assert!(
                    platform.groups.contains_key(group.as_str()),
                    "{id} lacks group {group}"
                );
            }
        }
    }

    #[test]
    fn packages_for_unions_and_dedupes() {
        let catalog = Catalog::from_json(
            r#"{
                "testdistro1": {
                    "groups": {
                        "chromium": ["libgtk-3-0", "libnss3"],
                        "firefox": ["libgtk-3-0", "libdbus-glib-1-2"]
                    },
                    "lib2package": {}
                }
            }"#,
        )
        .unwrap();

        let packages = catalog
            .packages_for(
                "testdistro1",
                &[DependencyGroup::Chromium, DependencyGroup::Firefox],
            )
            .unwrap();
        assert_eq!(
            packages.into_iter().collect::<Vec<_>>(),
            vec!["libdbus-glib-1-2", "libgtk-3-0", "libnss3"]
        );
    }

    #[test]
    fn packages_for_unknown_platform_is_none() {
        let catalog = Catalog::load().unwrap();
        assert!(catalog
            .packages_for("slackware15.0", &[DependencyGroup::Chromium])
            .is_none());
    }

    #[test]
    fn lib_to_package_applies_overrides_over_catalog() {
        let catalog = Catalog::from_json(
            r#"{
                "testdistro1": {
                    "groups": {},
                    "lib2package": {
                        "libgtk-3.so.0": "libgtk-3-0",
                        "libgstlibav.so": "stale-package-name"
                    }
                }
            }"#,
        )
        .unwrap();

        let mapping = catalog.lib_to_package(Some("testdistro1"));
        assert_eq!(
            mapping.get("libgtk-3.so.0").map(String::as_str),
            Some("libgtk-3-0")
        );
        // override wins over the catalog entry with the same key
        assert_eq!(
            mapping.get("libgstlibav.so").map(String::as_str),
            Some("gstreamer1.0-libav")
        );
    }

    #[test]
    fn lib_to_package_unknown_platform_is_overrides_only() {
        let catalog = Catalog::load().unwrap();
        let mapping = catalog.lib_to_package(None);
        assert!(mapping.contains_key("libgstlibav.so"));
        assert!(!mapping.contains_key("libgtk-3.so.0"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Catalog::from_json("{ not json").is_err());
    }
}
