//! Per-file scanning: open a file, feed its lines through a scanner.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::errors::ScanError;
use crate::lines::Lines;
use crate::scanner::{LiteralScanner, Scan};

/// Matches found on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatches {
    /// 1-based.
    pub line_number: usize,
    pub scan: Scan,
}

/// Open `path` for reading as a line source.
pub fn open_lines(path: &Path) -> Result<Lines<BufReader<File>>, ScanError> {
    let file = File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "opened file for scanning");
    Ok(Lines::new(BufReader::new(file)))
}

/// Scan every line of the file at `path`.
pub fn scan_file<'a>(
    path: &Path,
    scanner: &'a LiteralScanner,
) -> Result<ScanLines<'a, BufReader<File>>, ScanError> {
    let lines = open_lines(path)?;
    Ok(ScanLines::new(lines, path, scanner))
}

/// Iterator yielding the scan of each line in order.
///
/// A read failure is yielded once as `ScanError::Read`; callers stop there.
#[derive(Debug)]
pub struct ScanLines<'a, R> {
    lines: Lines<R>,
    path: PathBuf,
    scanner: &'a LiteralScanner,
    line_number: usize,
}

impl<'a, R: BufRead> ScanLines<'a, R> {
    pub fn new(lines: Lines<R>, path: &Path, scanner: &'a LiteralScanner) -> Self {
        Self {
            lines,
            path: path.to_path_buf(),
            scanner,
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for ScanLines<'_, R> {
    type Item = Result<LineMatches, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(source) => {
                return Some(Err(ScanError::Read {
                    path: self.path.clone(),
                    source,
                }))
            }
        };
        self.line_number += 1;

        let scan = self.scanner.scan(&line);
        if !scan.is_empty() {
            tracing::trace!(
                path = %self.path.display(),
                line = self.line_number,
                count = scan.count,
                "line matched"
            );
        }
        Some(Ok(LineMatches {
            line_number: self.line_number,
            scan,
        }))
    }
}
