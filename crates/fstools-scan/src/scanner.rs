//! Literal substring scanning over a single line.

/// How occurrences are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Byte-at-a-time automaton without a failure table. A mismatch drops
    /// the partial run entirely and the mismatching byte is not retried as
    /// a new start; a completed match restarts at the next byte. Undercounts
    /// overlapping occurrences (`"aa"` in `"aaa"` is 1).
    #[default]
    Naive,
    /// Every window equal to the pattern counts, overlaps included
    /// (`"aa"` in `"aaa"` is 2).
    Overlapping,
}

/// Result of scanning one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    pub count: usize,
    /// 0-based index of the last byte of each occurrence, ascending.
    pub positions: Vec<usize>,
}

impl Scan {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Scan `line` for `pattern` with the naive automaton.
///
/// An empty pattern, or one longer than the line, yields no matches.
pub fn scan(line: &[u8], pattern: &[u8]) -> Scan {
    let mut result = Scan::default();
    if pattern.is_empty() || pattern.len() > line.len() {
        return result;
    }

    let mut cursor = 0;
    for (i, &byte) in line.iter().enumerate() {
        if byte == pattern[cursor] {
            cursor += 1;
            if cursor == pattern.len() {
                result.positions.push(i);
                result.count += 1;
                cursor = 0;
            }
        } else {
            cursor = 0;
        }
    }
    result
}

/// Scan `line` for every occurrence of `pattern`, overlapping ones included.
pub fn scan_overlapping(line: &[u8], pattern: &[u8]) -> Scan {
    if pattern.is_empty() || pattern.len() > line.len() {
        return Scan::default();
    }

    let positions: Vec<usize> = line
        .windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(start, _)| start + pattern.len() - 1)
        .collect();
    Scan {
        count: positions.len(),
        positions,
    }
}

/// A pattern fixed for the duration of a run.
#[derive(Debug, Clone)]
pub struct LiteralScanner {
    pattern: Vec<u8>,
    mode: ScanMode,
}

impl LiteralScanner {
    pub fn new(pattern: impl Into<Vec<u8>>, mode: ScanMode) -> Self {
        Self {
            pattern: pattern.into(),
            mode,
        }
    }

    pub fn scan(&self, line: &[u8]) -> Scan {
        match self.mode {
            ScanMode::Naive => scan(line, &self.pattern),
            ScanMode::Overlapping => scan_overlapping(line, &self.pattern),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(line: &str, pattern: &str) -> usize {
        scan(line.as_bytes(), pattern.as_bytes()).count
    }

    #[test]
    fn repeated_pattern_reports_end_positions() {
        let result = scan(b"abcabc", b"abc");
        assert_eq!(result.count, 2);
        assert_eq!(result.positions, vec![2, 5]);
    }

    #[test]
    fn empty_line_has_no_matches() {
        let result = scan(b"", b"x");
        assert_eq!(result, Scan::default());
        assert!(result.is_empty());
    }

    #[test]
    fn empty_pattern_has_no_matches() {
        assert_eq!(scan(b"abc", b""), Scan::default());
        assert_eq!(scan(b"", b""), Scan::default());
        assert_eq!(scan_overlapping(b"abc", b""), Scan::default());
    }

    #[test]
    fn pattern_longer_than_line_has_no_matches() {
        assert_eq!(count("ab", "abc"), 0);
        assert_eq!(count("a", "aa"), 0);
        assert_eq!(scan_overlapping(b"ab", b"abc").count, 0);
    }

    #[test]
    fn naive_counts_overlap_once() {
        let result = scan(b"aaa", b"aa");
        assert_eq!(result.count, 1);
        assert_eq!(result.positions, vec![1]);
    }

    #[test]
    fn naive_restarts_right_after_a_match() {
        let result = scan(b"aaaa", b"aa");
        assert_eq!(result.positions, vec![1, 3]);
    }

    #[test]
    fn naive_undercounts_longer_runs() {
        // "aaa" ends at 2, then only "aa" is left.
        assert_eq!(count("aaaaa", "aaa"), 1);
        assert_eq!(scan_overlapping(b"aaaaa", b"aaa").count, 3);
    }

    #[test]
    fn naive_does_not_retry_mismatching_byte() {
        // The second 'a' mismatches 'b' and is not reconsidered as a start.
        assert_eq!(count("aab", "ab"), 0);
        assert_eq!(count("xaab", "ab"), 0);
        assert_eq!(scan_overlapping(b"aab", b"ab").count, 1);
    }

    #[test]
    fn naive_finds_separated_occurrences() {
        let result = scan(b"the cat sat on the mat", b"at");
        assert_eq!(result.positions, vec![6, 10, 21]);
        assert_eq!(count("hello world", "o"), 2);
        assert_eq!(count("hello world", "z"), 0);
    }

    #[test]
    fn match_at_end_of_line_with_terminator() {
        let result = scan(b"foo\n", b"foo");
        assert_eq!(result.positions, vec![2]);
    }

    #[test]
    fn single_byte_pattern_counts_every_byte() {
        let result = scan(b"aaa", b"a");
        assert_eq!(result.positions, vec![0, 1, 2]);
    }

    #[test]
    fn matching_is_case_sensitive_bytes() {
        assert_eq!(count("Abc abc", "abc"), 1);
        assert_eq!(count("ÄÖ ÄÖ", "Ö"), 2);
    }

    #[test]
    fn overlapping_reports_every_window() {
        let result = scan_overlapping(b"aaa", b"aa");
        assert_eq!(result.count, 2);
        assert_eq!(result.positions, vec![1, 2]);

        let result = scan_overlapping(b"abcabc", b"abc");
        assert_eq!(result.positions, vec![2, 5]);
    }

    #[test]
    fn positions_never_exceed_line_length() {
        let lines: [&[u8]; 4] = [b"", b"a", b"aaaaaaaa", b"abababab"];
        let patterns: [&[u8]; 3] = [b"a", b"ab", b"aa"];
        for line in lines {
            for pattern in patterns {
                for result in [scan(line, pattern), scan_overlapping(line, pattern)] {
                    assert_eq!(result.positions.len(), result.count);
                    assert!(result.count <= line.len());
                    assert!(result.positions.iter().all(|&p| p < line.len()));
                }
            }
        }
    }

    #[test]
    fn literal_scanner_dispatches_on_mode() {
        let naive = LiteralScanner::new("aa", ScanMode::Naive);
        assert_eq!(naive.scan(b"aaa").count, 1);

        let overlapping = LiteralScanner::new("aa", ScanMode::Overlapping);
        assert_eq!(overlapping.scan(b"aaa").count, 2);
    }

    #[test]
    fn default_mode_is_naive() {
        assert_eq!(ScanMode::default(), ScanMode::Naive);
    }
}
