//! Literal search with per-line and per-column reporting.

use std::io::Write;
use std::path::Path;

use fstools_common::AppendSink;
use fstools_scan::{scan_file, LineMatches, LiteralScanner, MatchRecord};

use crate::cli::Args;
use crate::errors::{SearchError, EXIT_CODES};

/// Run the tool against parsed arguments, writing the report to `out`.
pub fn run(args: &Args, out: &mut dyn Write) -> Result<(), SearchError> {
    if args
        .common
        .answer_info_request::<SearchError>(&EXIT_CODES, out)?
    {
        return Ok(());
    }

    let literal = args.literal.as_deref().ok_or(SearchError::NoLiteral)?;

    if args.verbose {
        writeln!(out, "line_numbers = {}", u8::from(args.line_numbers))?;
        writeln!(out, "verbose = 1")?;
        writeln!(out, "pattern = '{}'", literal.to_string_lossy())?;
        match &args.outfile {
            Some(path) => writeln!(out, "outfile = '{}'", path.display())?,
            None => writeln!(out, "outfile = (none)")?,
        }
        writeln!(out, "===")?;
    }

    if args.files.is_empty() {
        return Err(SearchError::NoFiles);
    }

    let scanner = LiteralScanner::new(literal.as_encoded_bytes(), args.scan_mode());
    let mut search = LiteralSearch {
        scanner: &scanner,
        line_numbers: args.line_numbers,
        verbose: args.verbose,
        outfile: args.outfile.as_ref().map(AppendSink::new),
        out,
    };
    for file in &args.files {
        writeln!(search.out, "reading file {}...", file.display())?;
        let total = search.search_file(file)?;
        writeln!(search.out, "> TOTAL: {total} occurrences")?;
    }
    Ok(())
}

struct LiteralSearch<'a> {
    scanner: &'a LiteralScanner,
    line_numbers: bool,
    verbose: bool,
    outfile: Option<AppendSink>,
    out: &'a mut dyn Write,
}

impl LiteralSearch<'_> {
    /// Scan one file, reporting as it goes. Returns the file's total count.
    fn search_file(&mut self, path: &Path) -> Result<usize, SearchError> {
        let mut total = 0;
        for line in scan_file(path, self.scanner)? {
            let LineMatches { line_number, scan } = line?;

            for &column in &scan.positions {
                if self.verbose {
                    writeln!(self.out, "> > found occurrence at column {column}")?;
                }
                if let Some(sink) = self.outfile.as_mut() {
                    let record = MatchRecord {
                        file: path,
                        line: line_number - 1,
                        column,
                    };
                    sink.write_line(&record.to_string())?;
                }
            }

            total += scan.count;
            if (scan.count > 0 && self.line_numbers) || self.verbose {
                writeln!(
                    self.out,
                    "> found {} occurrences in line {line_number}",
                    scan.count
                )?;
            }
        }
        tracing::debug!(path = %path.display(), total, "file searched");
        Ok(total)
    }
}
