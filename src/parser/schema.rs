//! Parsed thread dump data structures.

/// One thread block from a dump file
///
/// **Public** - produced by the segmenter, consumed by the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRecord {
    /// Thread name as quoted in the header line
    pub name: String,

    /// Every raw line of the block, header included, in file order
    pub lines: Vec<String>,
}

impl ThreadRecord {
    /// Open a new record from its header line
    pub fn new(name: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: vec![header.into()],
        }
    }

    /// The header line that opened this record
    pub fn header(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or_default()
    }

    /// Number of lines in the block, header included
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
