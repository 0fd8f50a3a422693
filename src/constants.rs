//! Application-wide constants.

use std::time::Duration;

pub use crate::branding::{APP_BINARY_NAME, APP_DATA_DIR, APP_DISPLAY_NAME as APP_NAME};

/// Interval between hero slideshow advances.
pub const SLIDE_INTERVAL: Duration = Duration::from_millis(3500);

/// Input poll timeout for the main event loop.
pub const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);
