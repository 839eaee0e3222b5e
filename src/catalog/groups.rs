//! Dependency groups.
//!
//! Each group names one catalog subset: one per bundled browser engine,
//! plus a generic group for the auxiliary tools shipped alongside them.

use clap::ValueEnum;
use std::fmt;

/// A set of binary artifacts sharing one native dependency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum DependencyGroup {
    Chromium,
    Firefox,
    Webkit,
    Tools,
}

impl DependencyGroup {
    /// Every known group, in catalog order.
    pub const ALL: [DependencyGroup; 4] = [
        DependencyGroup::Chromium,
        DependencyGroup::Firefox,
        DependencyGroup::Webkit,
        DependencyGroup::Tools,
    ];

    /// The catalog key for this group.
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyGroup::Chromium => "chromium",
            DependencyGroup::Firefox => "firefox",
            DependencyGroup::Webkit => "webkit",
            DependencyGroup::Tools => "tools",
        }
    }

    /// Libraries this group loads via `dlopen` at runtime rather than
    /// linking at startup. Static link inspection never sees these, so
    /// their presence is checked against the dynamic-linker cache instead.
    pub fn dynamic_load_libraries(&self) -> &'static [&'static str] {
        match self {
            DependencyGroup::Webkit => &["libGLESv2.so.2", "libx264.so"],
            _ => &[],
        }
    }
}

impl fmt::Display for DependencyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
