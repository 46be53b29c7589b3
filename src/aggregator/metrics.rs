//! Per-file thread counts derived from classified thread records.
//!
//! Every counter counts threads, never matching lines.

use super::classifier::{FrameSignature, ThreadPool};
use crate::parser::ThreadRecord;
use log::debug;

/// Classification result for one dump file
///
/// **Public** - produced by `build_file_report`, consumed by the table writer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    /// Display name of the dump file
    pub file: String,

    pub threads_total: usize,

    pub reactor_threads: usize,

    /// Reactor threads blocked on a socket read / response head
    pub reactor_socket_read_threads: usize,

    /// Reactor threads inside `RestTemplate.exchange`
    pub reactor_rest_template_threads: usize,

    pub bounded_elastic_threads: usize,

    /// boundedElastic threads inside `RestTemplate.exchange`
    pub bounded_elastic_rest_template_threads: usize,

    /// Threads of any name inside `RestTemplate.exchange`
    pub any_rest_template_threads: usize,

    /// Threads of any name blocked on a socket read
    pub any_socket_read_threads: usize,
}

impl FileReport {
    /// Counter values in table column order (file name excluded)
    pub fn counters(&self) -> [usize; 8] {
        [
            self.threads_total,
            self.reactor_threads,
            self.reactor_socket_read_threads,
            self.reactor_rest_template_threads,
            self.bounded_elastic_threads,
            self.bounded_elastic_rest_template_threads,
            self.any_rest_template_threads,
            self.any_socket_read_threads,
        ]
    }

    /// True when at least one event-loop thread sits in a blocking REST call
    pub fn is_event_loop_blocked(&self) -> bool {
        self.reactor_rest_template_threads > 0
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "{}: {} threads | reactor: {} (restTemplate {}, socketRead {}) | boundedElastic: {} (restTemplate {})",
            self.file,
            self.threads_total,
            self.reactor_threads,
            self.reactor_rest_template_threads,
            self.reactor_socket_read_threads,
            self.bounded_elastic_threads,
            self.bounded_elastic_rest_template_threads
        )
    }
}

/// Classify a file's threads and count them
///
/// **Public** - main entry point for classification
///
/// # Arguments
/// * `file` - Display name for the report row
/// * `threads` - Records from the segmenter, in file order
///
/// # Returns
/// The eight thread counters for this file. No matches means zero counts.
pub fn build_file_report(file: impl Into<String>, threads: &[ThreadRecord]) -> FileReport {
    let mut report = FileReport {
        file: file.into(),
        threads_total: threads.len(),
        ..Default::default()
    };

    for thread in threads {
        let pool = ThreadPool::of(thread);
        let socket_read = FrameSignature::SocketRead.matches(thread);
        let rest_template = FrameSignature::RestTemplate.matches(thread);

        match pool {
            ThreadPool::Reactor => {
                report.reactor_threads += 1;
                report.reactor_socket_read_threads += usize::from(socket_read);
                report.reactor_rest_template_threads += usize::from(rest_template);
            }
            ThreadPool::BoundedElastic => {
                report.bounded_elastic_threads += 1;
                report.bounded_elastic_rest_template_threads += usize::from(rest_template);
            }
            ThreadPool::Other => {}
        }

        report.any_socket_read_threads += usize::from(socket_read);
        report.any_rest_template_threads += usize::from(rest_template);
    }

    debug!("Classified {}", report.summary());

    report
}
