//! Part catalog loading
//!
//! A catalog is the ordered list of part records read from a plain-text
//! parts file, one record per line.

use std::fmt;
use std::path::Path;

/// Default parts file, resolved relative to the working directory
pub const DEFAULT_PARTS_FILE: &str = "vehicle_parts.txt";

/// A single part line, e.g. `"engine small fast"`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartRecord(String);

impl PartRecord {
    /// Create a record from a raw line. Returns None for blank lines.
    pub fn new(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The full record text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First whitespace-delimited token (the category keyword)
    pub fn leading_token(&self) -> &str {
        self.0.split_whitespace().next().unwrap_or("")
    }

    /// Tokens after the leading one
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace().skip(1)
    }
}

impl fmt::Display for PartRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, immutable list of part records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<PartRecord>,
}

/// Outcome of [`Catalog::load`]
#[derive(Debug)]
pub enum LoadOutcome {
    /// File was read; catalog may still be empty
    Loaded(Catalog),
    /// File could not be opened; an empty catalog stands in
    Unavailable {
        catalog: Catalog,
        reason: std::io::Error,
    },
}

impl Catalog {
    /// Build a catalog from lines, trimming each and skipping blanks
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records = lines
            .into_iter()
            .filter_map(|line| PartRecord::new(line.as_ref()))
            .collect();
        Self { records }
    }

    /// Parse file contents already held in memory
    pub fn parse(contents: &str) -> Self {
        Self::from_lines(contents.lines())
    }

    /// Load a catalog from a parts file
    ///
    /// The file is read in full and closed before returning. A file that
    /// cannot be opened is not an error: it yields an empty catalog and the
    /// reason is handed back so the caller can warn about it. Bytes are
    /// decoded lossily, no encoding validation is done.
    pub fn load(path: &Path) -> LoadOutcome {
        match std::fs::read(path) {
            Ok(bytes) => LoadOutcome::Loaded(Self::parse(&String::from_utf8_lossy(&bytes))),
            Err(reason) => LoadOutcome::Unavailable {
                catalog: Self::default(),
                reason,
            },
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PartRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PartRecord;
    type IntoIter = std::slice::Iter<'a, PartRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
