//! Branding and application identity configuration.
//!
//! This module centralizes all branding-related strings (names, paths, URLs) to make
//! future rebranding easier. Change values here to rebrand the entire application.

/// The human-readable display name of the application.
///
/// Used in window titles, help text and documentation.
pub const APP_DISPLAY_NAME: &str = "LazyLink";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "lazylink";

/// The directory name for application data (settings, exports).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "LazyLink";

/// Short description for package metadata and help text.
pub const APP_DESCRIPTION: &str = "Terminal link-in-bio landing page";
