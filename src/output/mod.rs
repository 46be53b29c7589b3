//! Output writers for analysis results.
//!
//! This module handles printing reports:
//! - Tab-separated table, one row per dump file
//! - Fixed interpretation hints

pub mod table;

// Re-export main functions
pub use table::{render_header, render_row, write_interpretation, write_report_table, TABLE_COLUMNS};
