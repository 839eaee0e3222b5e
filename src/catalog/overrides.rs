//! Manual library-to-package overrides.
//!
//! The distribution catalog maps libraries to the packages that export
//! them, but a few packages cannot be derived that way: their filenames
//! differ from every library they ship. These entries are overlaid on the
//! catalog mapping and replace catalog entries with the same key.

use std::collections::BTreeMap;

/// Entries applied on top of the per-distribution mapping.
pub const LIBRARY_TO_PACKAGE_OVERRIDES: &[(&str, &str)] = &[
    // gstreamer's ffmpeg plugin exports libgstlibav.so
    ("libgstlibav.so", "gstreamer1.0-libav"),
];

/// Apply the override table to `mapping`, replacing existing entries.
pub fn apply(mapping: &mut BTreeMap<String, String>) {
    for (library, package) in LIBRARY_TO_PACKAGE_OVERRIDES {
        mapping.insert((*library).to_string(), (*package).to_string());
    }
}
