//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;

// Re-export main command functions
pub use analyze::{
    analyze_file, display_name, execute_analyze, resolve_input_files, validate_args, AnalyzeArgs,
};
