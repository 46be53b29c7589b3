//! Tab-separated report table writer.
//!
//! Writes one header row, one row per dump file, then the fixed
//! interpretation hints.

use crate::aggregator::FileReport;
use crate::utils::config::{INTERPRETATION_HEADING, INTERPRETATION_LINES};
use log::debug;
use std::io::{self, Write};

/// Column names, in output order
pub const TABLE_COLUMNS: [&str; 9] = [
    "file",
    "threads_total",
    "reactor_threads",
    "reactor_socketRead_threads",
    "reactor_restTemplate_threads",
    "boundedElastic_threads",
    "boundedElastic_restTemplate_threads",
    "any_restTemplate_threads",
    "any_socketRead_threads",
];

/// Render the tab-separated header row
pub fn render_header() -> String {
    TABLE_COLUMNS.join("\t")
}

/// Render one report as a tab-separated row
pub fn render_row(report: &FileReport) -> String {
    let mut fields = Vec::with_capacity(TABLE_COLUMNS.len());
    fields.push(report.file.clone());
    fields.extend(report.counters().iter().map(|n| n.to_string()));
    fields.join("\t")
}

/// Write the header row and one row per report
///
/// **Public** - main entry point for table output
///
/// # Errors
/// * I/O error from the underlying writer
pub fn write_report_table<W: Write>(writer: &mut W, reports: &[FileReport]) -> io::Result<()> {
    debug!("Writing table with {} rows", reports.len());

    writeln!(writer, "{}", render_header())?;
    for report in reports {
        writeln!(writer, "{}", render_row(report))?;
    }

    Ok(())
}

/// Write the blank separator line and the interpretation hints
pub fn write_interpretation<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", INTERPRETATION_HEADING)?;
    for line in INTERPRETATION_LINES {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}
