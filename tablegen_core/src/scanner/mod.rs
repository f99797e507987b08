//! Line scanner: streams an input header and keeps only table lines.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::{TableError, TableResult};

/// A line that starts with the profile prefix, with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine {
    pub number: usize,
    pub text: String,
}

/// Lazy iterator over the table lines of one reader.
///
/// Non-matching lines are dropped silently. The iterator is single-pass and ends at EOF or
/// at the first read error.
pub struct LineScanner<R> {
    lines: Lines<R>,
    prefix: &'static str,
    path: PathBuf,
    number: usize,
    failed: bool,
}

impl LineScanner<BufReader<File>> {
    /// Opens `path` for scanning. A missing or unreadable file is reported with its path.
    pub fn open(path: &Path, prefix: &'static str) -> TableResult<Self> {
        let file = File::open(path).map_err(|source| TableError::Input {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file), prefix, path))
    }
}

impl<R: BufRead> LineScanner<R> {
    /// Scans any buffered reader; `path` is only used for error reporting.
    pub fn new(reader: R, prefix: &'static str, path: &Path) -> Self {
        Self {
            lines: reader.lines(),
            prefix,
            path: path.to_path_buf(),
            number: 0,
            failed: false,
        }
    }

    fn input_error(&mut self, source: io::Error) -> TableError {
        self.failed = true;
        TableError::Input {
            path: self.path.clone(),
            source,
        }
    }
}

impl<R: BufRead> Iterator for LineScanner<R> {
    type Item = TableResult<ScannedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let mut text = match self.lines.next()? {
                Ok(text) => text,
                Err(e) => return Some(Err(self.input_error(e))),
            };
            self.number += 1;
            if text.ends_with('\r') {
                text.pop();
            }
            if text.starts_with(self.prefix) {
                return Some(Ok(ScannedLine {
                    number: self.number,
                    text,
                }));
            }
        }
    }
}
