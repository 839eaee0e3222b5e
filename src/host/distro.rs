//! Linux distribution detection via `/etc/os-release`.

use std::fs;
use std::path::Path;

const OS_RELEASE: &str = "/etc/os-release";

/// Identity of the running Linux distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistroInfo {
    /// Lower-case distribution id (`ID=` field), e.g. `ubuntu`.
    pub id: String,
    /// Release version (`VERSION_ID=` field), e.g. `22.04`.
    pub version: String,
}

impl DistroInfo {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
        }
    }

    /// The catalog key for this distribution, e.g. `ubuntu22.04`.
    pub fn platform_id(&self) -> String {
        format!("{}{}", self.id, self.version)
    }
}

/// Read and parse `/etc/os-release`. `None` when the file is absent or
/// lacks the identity fields.
pub fn detect() -> Option<DistroInfo> {
    let text = fs::read_to_string(Path::new(OS_RELEASE)).ok()?;
    parse(&text)
}

/// Parse os-release text into a [`DistroInfo`].
///
/// Values may be quoted (`VERSION_ID="22.04"`) or bare (`ID=ubuntu`).
pub fn parse(text: &str) -> Option<DistroInfo> {
    let mut id = None;
    let mut version = None;
    for line in text.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("ID=") {
            id = Some(unquote(value).to_lowercase());
        } else if let Some(value) = line.strip_prefix("VERSION_ID=") {
            version = Some(unquote(value).to_string());
        }
    }
    Some(DistroInfo {
        id: id?,
        version: version?,
    })
}

fn unquote(value: &str) -> &str {
    value.trim().trim_matches('"')
}
