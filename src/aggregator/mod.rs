//! Classification of parsed thread records into per-file counts.
//!
//! This module turns segmented thread dumps into:
//! - Pool membership by thread name (reactor / boundedElastic)
//! - Frame signature presence (socket read / RestTemplate call)
//! - One `FileReport` of thread counters per dump file

pub mod classifier;
pub mod metrics;

// Re-export main types and functions
pub use classifier::{FrameSignature, ThreadPool};
pub use metrics::{build_file_report, FileReport};
