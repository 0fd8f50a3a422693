//! LazyLink library
//!
//! Core functionality for the LazyLink terminal landing page: the site
//! document model, link grouping and dispatch, media integrations, the
//! brochart image export, and the TUI itself.

// Module declarations
pub mod audio;
pub mod branding;
pub mod cli;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod export;
pub mod shortcuts;
pub mod site;
pub mod system;
pub mod tui;
