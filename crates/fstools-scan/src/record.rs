use std::fmt;
use std::path::Path;

/// One match location as written to a record file: `<file>:<line>:<column>`.
///
/// Both fields are 0-based: `line` is the index of the line within the file
/// (one less than the number printed in "in line L" reports) and `column`
/// is the index of the match's last byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRecord<'a> {
    pub file: &'a Path,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for MatchRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}
