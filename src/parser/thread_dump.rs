//! Thread dump segmenter for jstack output.
//!
//! Splits raw dump text into one `ThreadRecord` per thread block.
//! A block starts at a line beginning with a quoted thread name and runs
//! until the next such line or end of input.

use super::schema::ThreadRecord;
use crate::utils::error::ParseError;
use log::debug;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static THREAD_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"^"([^"]+)""#).unwrap());

/// Extract the thread name if `line` is a thread header
///
/// **Public** - the header rule shared by the segmenter and tests
///
/// # Example
/// ```ignore
/// assert_eq!(parse_thread_header(r#""main" #1 prio=5"#), Some("main"));
/// assert_eq!(parse_thread_header("\tat java.lang.Thread.run"), None);
/// ```
pub fn parse_thread_header(line: &str) -> Option<&str> {
    THREAD_HEADER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether `c` ends a line
///
/// **Private** - LF, CR, VT, FF, the ASCII file/group/record separators,
/// NEL and the Unicode line/paragraph separators
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into lines without their terminators
///
/// **Public** - line splitting used by the segmenter
///
/// `\r\n` is one break; every other break character ends a line on its
/// own. A trailing break does not produce a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(_, '\n')) = chars.peek() {
                chars.next();
                start += 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Split dump text into thread records
///
/// **Public** - main entry point for segmentation
///
/// # Arguments
/// * `text` - Full text of one dump file
///
/// # Returns
/// Records in header order. Lines before the first header belong to no
/// record and are dropped. Text without headers yields an empty vector.
pub fn segment_threads(text: &str) -> Vec<ThreadRecord> {
    let mut threads = Vec::new();
    let mut current: Option<ThreadRecord> = None;
    let mut preamble = 0usize;

    for line in split_lines(text) {
        if let Some(name) = parse_thread_header(line) {
            if let Some(done) = current.take() {
                threads.push(done);
            }
            current = Some(ThreadRecord::new(name, line));
            continue;
        }

        match current.as_mut() {
            Some(record) => record.lines.push(line.to_string()),
            None => preamble += 1,
        }
    }

    if let Some(done) = current {
        threads.push(done);
    }

    debug!(
        "Segmented {} threads ({} preamble lines skipped)",
        threads.len(),
        preamble
    );

    threads
}

/// Read a dump file, dropping bytes that are not valid UTF-8
///
/// **Public** - decoding never fails; only I/O errors are reported
///
/// # Errors
/// * `ParseError::ReadFailed` - the file cannot be opened or read
pub fn read_dump(path: &Path) -> Result<String, ParseError> {
    let bytes = std::fs::read(path).map_err(|source| ParseError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let mut text = String::with_capacity(bytes.len());
    let mut dropped = 0usize;
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        dropped += chunk.invalid().len();
    }

    if dropped > 0 {
        debug!("{}: dropped {} invalid UTF-8 bytes", path.display(), dropped);
    }

    Ok(text)
}

/// Read and segment one dump file
///
/// **Public** - convenience wrapper used by the analyze command
pub fn parse_dump_file(path: &Path) -> Result<Vec<ThreadRecord>, ParseError> {
    debug!("Parsing dump: {}", path.display());
    let text = read_dump(path)?;
    Ok(segment_threads(&text))
}
