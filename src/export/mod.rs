//! Image export for the brochart card.
//!
//! The card's composed content is rasterized to a JPEG sheet and offered
//! as a named file under the configured export directory.

pub mod brochart;
pub mod font;

pub use brochart::{compose_sheet_lines, export_brochart_jpeg, export_file_name};
