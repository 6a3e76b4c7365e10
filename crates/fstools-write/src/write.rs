//! Content writer.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::cli::Args;
use crate::errors::{WriteError, EXIT_CODES};

pub fn run(args: &Args, out: &mut dyn Write) -> Result<(), WriteError> {
    if args
        .common
        .answer_info_request::<WriteError>(&EXIT_CODES, out)?
    {
        return Ok(());
    }

    let content = args.content.as_deref().ok_or(WriteError::NoContent)?;
    if args.files.is_empty() {
        return Err(WriteError::NoFiles);
    }

    for file in &args.files {
        write_file(file, content.as_encoded_bytes(), args.append)?;
    }
    Ok(())
}

/// Write `content` verbatim to `path`, replacing or appending to what is
/// there. No newline is added.
pub fn write_file(path: &Path, content: &[u8], append: bool) -> Result<(), WriteError> {
    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }

    // The handle is dropped before any error leaves this function.
    let mut file = options.open(path).map_err(|source| WriteError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(content)
        .and_then(|()| file.flush())
        .map_err(|source| WriteError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), append, "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use fstools_common::ExitStatus;
    use std::fs;
    use tempfile::TempDir;

    fn run_args(argv: &[&str]) -> (Result<(), WriteError>, String) {
        let args =
            Args::try_parse_from(std::iter::once("write").chain(argv.iter().copied())).unwrap();
        let mut out = Vec::new();
        let result = run(&args, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn writes_every_file_verbatim() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");

        let (result, out) = run_args(&["hello", a.to_str().unwrap(), b.to_str().unwrap()]);
        result.unwrap();
        assert!(out.is_empty());
        assert_eq!(fs::read_to_string(&a).unwrap(), "hello");
        assert_eq!(fs::read_to_string(&b).unwrap(), "hello");
    }

    #[test]
    fn replaces_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "a much longer earlier text").unwrap();

        write_file(&path, b"short", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn append_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.txt");
        fs::write(&path, "one\n").unwrap();

        let (result, _) = run_args(&["-a", "two\n", path.to_str().unwrap()]);
        result.unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn empty_content_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "data").unwrap();

        run_args(&["", path.to_str().unwrap()]).0.unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"");
    }

    #[test]
    fn missing_parent_fails_to_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("a.txt");

        let err = write_file(&path, b"x", false).unwrap_err();
        assert!(matches!(err, WriteError::Open { .. }));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn first_failure_stops_later_files() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("missing").join("a.txt");
        let good = dir.path().join("b.txt");

        let (result, _) = run_args(&["x", bad.to_str().unwrap(), good.to_str().unwrap()]);
        assert!(result.is_err());
        assert!(!good.exists());
    }

    #[test]
    fn positional_checks() {
        let (result, _) = run_args(&[]);
        assert!(matches!(result, Err(WriteError::NoContent)));

        let (result, _) = run_args(&["content"]);
        assert!(matches!(result, Err(WriteError::NoFiles)));
    }
}
