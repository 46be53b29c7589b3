//! Jstack Analyzer
//!
//! Classifies JVM thread dumps to show whether Reactor Netty event-loop
//! threads are blocked by synchronous downstream HTTP calls.
//!
//! This crate provides the core implementation for the
//! `analyze-jstack` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! jstack <pid> > dumps/jstack-1.txt
//! analyze-jstack dumps/
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
