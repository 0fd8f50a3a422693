//! CLI command handlers for LazyLink.
//!
//! This module provides headless, scriptable access to the page's core
//! behavior for automation, testing, and CI integration.

pub mod common;
pub mod export;
pub mod inspect;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult};
pub use export::ExportArgs;
pub use inspect::InspectArgs;
pub use validate::ValidateArgs;
