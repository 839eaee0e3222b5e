//! Command implementations.

pub mod completions;
pub mod dispatcher;
pub mod install;
pub mod validate;

pub use dispatcher::dispatch;
