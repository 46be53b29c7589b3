//! Thread dump parsing.
//!
//! This module handles:
//! - Permissive reading of dump files
//! - Detecting thread header lines
//! - Segmenting dump text into per-thread records

pub mod schema;
pub mod thread_dump;

// Re-export main types
pub use schema::ThreadRecord;
pub use thread_dump::{parse_dump_file, parse_thread_header, read_dump, segment_threads, split_lines};
