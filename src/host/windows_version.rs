//! Windows version detection and the platform support floor.

/// Major/minor Windows kernel version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowsVersion {
    pub major: u32,
    pub minor: u32,
}

impl WindowsVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Support floor: Windows 8 / Server 2012 (6.2). Windows 7-class
    /// systems (6.1) and below are explicitly unsupported.
    pub fn is_supported(&self) -> bool {
        self.major > 6 || (self.major == 6 && self.minor > 1)
    }
}

/// Extract a major/minor version from `cmd /c ver` output, e.g.
/// `Microsoft Windows [Version 10.0.19045.3693]`.
pub fn parse_ver_output(text: &str) -> Option<WindowsVersion> {
    let re = regex::Regex::new(r"(\d+)\.(\d+)(?:\.\d+)*").ok()?;
    let caps = re.captures(text)?;
    Some(WindowsVersion {
        major: caps.get(1)?.as_str().parse().ok()?,
        minor: caps.get(2)?.as_str().parse().ok()?,
    })
}

/// Query the running OS version.
#[cfg(windows)]
pub fn detect() -> Option<WindowsVersion> {
    use std::ffi::OsStr;
    use std::path::Path;

    let result = crate::shell::run_capture(
        Path::new("cmd"),
        &[OsStr::new("/c"), OsStr::new("ver")],
        None,
        &[],
    )
    .ok()?;
    if !result.success {
        return None;
    }
    parse_ver_output(&result.stdout)
}

/// Non-Windows hosts have no Windows version.
#[cfg(not(windows))]
pub fn detect() -> Option<WindowsVersion> {
    None
}
