use std::io::Write;
use std::path::Path;

use fstools_scan::{scan_file, LiteralScanner};

use crate::cli::Args;
use crate::errors::{GrepError, EXIT_CODES};

pub fn run(args: &Args, out: &mut dyn Write) -> Result<(), GrepError> {
    if args
        .common
        .answer_info_request::<GrepError>(&EXIT_CODES, out)?
    {
        return Ok(());
    }

    let pattern = args.pattern.as_deref().ok_or(GrepError::NoPattern)?;
    if args.files.is_empty() {
        return Err(GrepError::NoFiles);
    }

    writeln!(out, "line_numbers = {}", u8::from(args.line_numbers))?;
    writeln!(out, "===")?;

    let scanner = LiteralScanner::new(pattern.as_encoded_bytes(), args.scan_mode());
    for file in &args.files {
        writeln!(out, "reading file {}...", file.display())?;
        let total = count_in_file(file, &scanner, args.line_numbers, out)?;
        writeln!(out, "found {total} occurrences")?;
    }
    Ok(())
}

fn count_in_file(
    path: &Path,
    scanner: &LiteralScanner,
    line_numbers: bool,
    out: &mut dyn Write,
) -> Result<usize, GrepError> {
    let mut total = 0;
    for line in scan_file(path, scanner)? {
        let line = line?;
        if line_numbers && !line.scan.is_empty() {
            writeln!(
                out,
                "> found {} occurrences in line {}",
                line.scan.count, line.line_number
            )?;
        }
        total += line.scan.count;
    }
    tracing::debug!(path = %path.display(), total, "counted pattern");
    Ok(total)
}
