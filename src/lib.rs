//! hostdeps - Native dependency validation for bundled browser binaries.
//!
//! hostdeps checks whether a host machine has the native shared libraries
//! required to run pre-built browser engines and auxiliary tools, and turns
//! missing dependencies into an actionable fix: a package-manager command
//! it can recommend or run directly.
//!
//! # Modules
//!
//! - [`catalog`] - Dependency groups, catalog lookup, and manual overrides
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`host`] - Host platform identity (distribution, Windows version)
//! - [`installer`] - Package-manager command construction and execution
//! - [`platform`] - Per-OS policy behind the shared validation pipeline
//! - [`shell`] - Subprocess execution helpers
//! - [`ui`] - Styled terminal output
//! - [`validation`] - Scanner, prober, aggregator, and classification
//!
//! # Example
//!
//! ```no_run
//! use hostdeps::catalog::{Catalog, DependencyGroup};
//! use hostdeps::validation::{validate, ValidationRequest};
//!
//! let catalog = Catalog::load()?;
//! let policy = hostdeps::platform::detect()?;
//! let request = ValidationRequest::new("/opt/browsers/chromium", DependencyGroup::Chromium);
//! let outcome = validate(&request, policy.as_ref(), &catalog)?;
//! assert!(outcome.is_satisfied());
//! # Ok::<(), hostdeps::HostdepsError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod host;
pub mod installer;
pub mod platform;
pub mod shell;
pub mod ui;
pub mod validation;

pub use error::{HostdepsError, Result};
