//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Resolves path arguments into dump files
//! 2. Segments each file into thread records
//! 3. Classifies threads into per-file counts
//! 4. Prints the report table and interpretation hints

use crate::aggregator::{build_file_report, FileReport};
use crate::output::{write_interpretation, write_report_table};
use crate::parser::parse_dump_file;
use crate::utils::config::DUMP_FILE_SUFFIX;
use crate::utils::error::{AnalyzeError, ParseError};
use log::{debug, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Dump files and/or directories of dump files
    pub paths: Vec<PathBuf>,
}

/// Validate analyze arguments
///
/// # Errors
/// * `AnalyzeError::NoInputs` - no path was given
pub fn validate_args(args: &AnalyzeArgs) -> Result<(), AnalyzeError> {
    if args.paths.is_empty() {
        return Err(AnalyzeError::NoInputs);
    }
    Ok(())
}

/// Expand path arguments into the list of dump files to analyze
///
/// **Public** - directories contribute their `*.txt` entries sorted by name;
/// any other argument is kept as given, in argument order.
pub fn resolve_input_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let found = list_dump_files(path);
            debug!("{}: {} dump files", path.display(), found.len());
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }

    files
}

/// List `*.txt` files directly inside `dir`, sorted by file name
///
/// **Private** - helper for resolve_input_files
///
/// Symlinks are followed, so a linked dump counts as a file and a linked
/// directory is skipped like any other directory.
fn list_dump_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(DUMP_FILE_SUFFIX))
        .map(|entry| entry.into_path())
        .collect()
}

/// Name shown in the `file` column: the base name of the path
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Segment and classify one dump file
///
/// # Errors
/// * `ParseError::ReadFailed` - the file cannot be read at all
pub fn analyze_file(path: &Path) -> Result<FileReport, ParseError> {
    let threads = parse_dump_file(path)?;
    Ok(build_file_report(display_name(path), &threads))
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Analyze command arguments
/// * `writer` - Destination for the table and hints (stdout in the CLI)
///
/// # Returns
/// The reports that were printed, in output order
///
/// # Errors
/// * `AnalyzeError::NoInputs` - no path arguments
/// * `AnalyzeError::NoFilesFound` - arguments resolved to zero files
/// * `AnalyzeError::Output` - writing the report failed
///
/// A file that cannot be read is logged and left out of the table; the
/// remaining files are still analyzed.
pub fn execute_analyze<W: Write>(
    args: &AnalyzeArgs,
    writer: &mut W,
) -> Result<Vec<FileReport>, AnalyzeError> {
    let start_time = Instant::now();

    validate_args(args)?;

    let files = resolve_input_files(&args.paths);
    if files.is_empty() {
        return Err(AnalyzeError::NoFilesFound);
    }

    info!("Analyzing {} dump files", files.len());

    let mut reports = Vec::with_capacity(files.len());
    for path in &files {
        match analyze_file(path) {
            Ok(report) => {
                if report.is_event_loop_blocked() {
                    warn!(
                        "{}: {} reactor threads inside RestTemplate.exchange",
                        report.file, report.reactor_rest_template_threads
                    );
                }
                info!("{}", report.summary());
                reports.push(report);
            }
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }

    write_report_table(writer, &reports)?;
    write_interpretation(writer)?;
    writer.flush()?;

    debug!(
        "Analyzed {} of {} files in {:.2}s",
        reports.len(),
        files.len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(reports)
}
