//! Host platform identity.
//!
//! Answers "which catalog key does this machine map to": the Linux
//! distribution identifier, and the Windows version/architecture used by
//! the support-floor check.

pub mod distro;
pub mod windows_version;

pub use distro::DistroInfo;
pub use windows_version::WindowsVersion;
