//! Error types for hostdeps operations.
//!
//! This module defines [`HostdepsError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `HostdepsError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `HostdepsError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hostdeps operations.
#[derive(Debug, Error)]
pub enum HostdepsError {
    /// A directory or entry could not be read while scanning for binaries.
    /// A partial candidate list would hide missing dependencies, so the
    /// whole scan fails.
    #[error("Failed to scan {path}: {source}")]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The host lacks native libraries required by the probed binaries.
    /// The message carries the full remediation text.
    #[error("{message}")]
    MissingDependencies { message: String },

    /// A spawned command failed or could not be started.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Validation was requested on an OS this tool has no policy for.
    #[error("Unsupported host platform: {message}")]
    UnsupportedPlatform { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for hostdeps operations.
pub type Result<T> = std::result::Result<T, HostdepsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_failed_displays_path() {
        let err = HostdepsError::ScanFailed {
            path: PathBuf::from("/opt/browsers/chromium"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/opt/browsers/chromium"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn missing_dependencies_displays_message_verbatim() {
        let err = HostdepsError::MissingDependencies {
            message: "Host is missing libgtk-3.so.0".into(),
        };
        assert_eq!(err.to_string(), "Host is missing libgtk-3.so.0");
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = HostdepsError::CommandFailed {
            command: "apt-get update".into(),
            code: Some(100),
        };
        let msg = err.to_string();
        assert!(msg.contains("apt-get update"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn unsupported_platform_displays_message() {
        let err = HostdepsError::UnsupportedPlatform {
            message: "no validation policy for macos".into(),
        };
        assert!(err.to_string().contains("macos"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: HostdepsError = io_err.into();
        assert!(matches!(err, HostdepsError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(HostdepsError::UnsupportedPlatform {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
