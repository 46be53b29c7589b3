//! Thread and stack-frame classification.
//!
//! Threads are grouped by name prefix into scheduler pools, and tested for
//! the presence of frame signatures that indicate blocking I/O.

use crate::parser::ThreadRecord;
use crate::utils::config::{
    BOUNDED_ELASTIC_THREAD_PREFIX, REACTOR_THREAD_PREFIX, REST_TEMPLATE_MARKERS,
    SOCKET_READ_MARKERS,
};

/// Scheduler pool a thread belongs to, judged by its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadPool {
    /// Reactor Netty event-loop thread (`reactor-http*`)
    Reactor,
    /// Reactor boundedElastic worker (`boundedElastic*`)
    BoundedElastic,
    Other,
}

impl ThreadPool {
    /// Classify a thread name by prefix (case-sensitive)
    pub fn from_name(name: &str) -> Self {
        if name.starts_with(REACTOR_THREAD_PREFIX) {
            ThreadPool::Reactor
        } else if name.starts_with(BOUNDED_ELASTIC_THREAD_PREFIX) {
            ThreadPool::BoundedElastic
        } else {
            ThreadPool::Other
        }
    }

    pub fn of(thread: &ThreadRecord) -> Self {
        Self::from_name(&thread.name)
    }
}

/// Stack-frame signature looked for in a thread's lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSignature {
    /// Waiting on a socket read or an HTTP response head
    SocketRead,
    /// Inside a synchronous `RestTemplate.exchange` call
    RestTemplate,
}

impl FrameSignature {
    /// Substrings that identify this signature
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            FrameSignature::SocketRead => SOCKET_READ_MARKERS,
            FrameSignature::RestTemplate => REST_TEMPLATE_MARKERS,
        }
    }

    /// Whether a single line carries this signature
    pub fn matches_line(self, line: &str) -> bool {
        self.markers().iter().any(|marker| line.contains(marker))
    }

    /// Whether any line of the thread carries this signature
    ///
    /// Presence test: a thread with the frame on several lines still
    /// counts once.
    pub fn matches(self, thread: &ThreadRecord) -> bool {
        thread.lines.iter().any(|line| self.matches_line(line))
    }
}
