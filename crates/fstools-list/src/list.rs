//! Directory listing.

use std::io::Write;
use std::path::Path;

use fstools_walk::{EntryKind, WalkEvent, Walker};

use crate::cli::Args;
use crate::errors::{ListError, EXIT_CODES};
use crate::probe::probe_file;

/// Run the tool against parsed arguments, writing the listing to `out`.
pub fn run(args: &Args, out: &mut dyn Write) -> Result<(), ListError> {
    if args
        .common
        .answer_info_request::<ListError>(&EXIT_CODES, out)?
    {
        return Ok(());
    }

    if args.directories.is_empty() {
        return Err(ListError::NoDirectories);
    }

    if args.verbose {
        writeln!(out, "[main] verbose output enabled")?;
        writeln!(out, "[main] ino = {}", u8::from(args.ino))?;
        writeln!(out, "[main] files = {}", u8::from(args.files))?;
    }

    for dir in &args.directories {
        if args.verbose {
            writeln!(out, "[main] reading directory {}", dir.display())?;
        }
        list_directory(dir, args, out)?;
    }
    Ok(())
}

fn list_directory(dir: &Path, args: &Args, out: &mut dyn Write) -> Result<(), ListError> {
    for event in Walker::new(dir, false) {
        match event? {
            WalkEvent::Enter(path) => writeln!(out, "{}", path.display())?,
            WalkEvent::Entry(entry) => {
                write!(out, "> {} {}; ", entry.kind, entry.name.to_string_lossy())?;
                if args.ino {
                    if let Some(serial) = entry.serial {
                        write!(out, "serial {serial}; ")?;
                    }
                }
                if args.files && entry.kind == EntryKind::File {
                    match probe_file(&entry.path) {
                        Ok(probe) => write!(out, "{probe}")?,
                        Err(e) => {
                            if let Some(magic) = e.magic() {
                                write!(out, "{magic}")?;
                            }
                            // Terminate the partial entry line before failing.
                            writeln!(out)?;
                            return Err(e.into());
                        }
                    }
                }
                writeln!(out)?;
            }
            WalkEvent::Leave(_) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use fstools_common::ExitStatus;
    use std::fs;
    use tempfile::TempDir;

    fn run_args(argv: &[&str]) -> (Result<(), ListError>, String) {
        let args = Args::try_parse_from(std::iter::once("list").chain(argv.iter().copied()))
            .expect("arguments should parse");
        let mut out = Vec::new();
        let result = run(&args, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn root_of(dir: &TempDir) -> String {
        dir.path().to_str().unwrap().to_string()
    }

    #[test]
    fn lists_single_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), b"hi").unwrap();
        let root = root_of(&dir);

        let (result, out) = run_args(&[&root]);
        result.unwrap();
        assert_eq!(out, format!("{root}\n> F notes.txt; \n"));
    }

    #[test]
    fn lists_directories_with_d_tag() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("hidden"), b"x").unwrap();
        let root = root_of(&dir);

        let (result, out) = run_args(&[&root]);
        result.unwrap();
        assert_eq!(out, format!("{root}\n> D sub; \n"));
    }

    #[test]
    fn lists_every_entry_once() {
        let dir = TempDir::new().unwrap();
        for name in ["a", "b", "c"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        let root = root_of(&dir);

        let (result, out) = run_args(&[&root]);
        result.unwrap();
        let mut lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.remove(0), root);
        lines.sort_unstable();
        assert_eq!(lines, vec!["> F a; ", "> F b; ", "> F c; "]);
    }

    #[cfg(unix)]
    #[test]
    fn ino_flag_prints_serial() {
        use std::os::unix::fs::MetadataExt;

        let dir = TempDir::new().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, b"").unwrap();
        let ino = fs::metadata(&file).unwrap().ino();
        let root = root_of(&dir);

        let (result, out) = run_args(&["-i", &root]);
        result.unwrap();
        assert_eq!(out, format!("{root}\n> F f; serial {ino}; \n"));
    }

    #[test]
    fn files_flag_probes_regular_files_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("empty"), b"").unwrap();
        let root = root_of(&dir);

        let (result, out) = run_args(&["--files", &root]);
        result.unwrap();
        assert_eq!(out, format!("{root}\n> F empty; (empty); \n"));

        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let root = root_of(&dir);
        let (result, out) = run_args(&["-f", &root]);
        result.unwrap();
        assert_eq!(out, format!("{root}\n> D sub; \n"));
    }

    #[test]
    fn files_flag_prints_header() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bin"), [0x7f, b'E', b'L', b'F', 2, 1]).unwrap();
        let root = root_of(&dir);

        let (result, out) = run_args(&["-f", &root]);
        result.unwrap();
        assert_eq!(
            out,
            format!("{root}\n> F bin; ELF magic 0x7f454c46; class 0x02; \n")
        );
    }

    #[test]
    fn short_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tiny"), b"ab").unwrap();
        let root = root_of(&dir);

        let (result, out) = run_args(&["-f", &root]);
        assert_eq!(result.unwrap_err().exit_code(), 7);
        assert_eq!(out, format!("{root}\n> F tiny; \n"));
    }

    #[test]
    fn missing_class_byte_prints_magic_first() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("four"), [0x7f, b'E', b'L', b'F']).unwrap();
        let root = root_of(&dir);

        let (result, out) = run_args(&["-f", &root]);
        assert_eq!(result.unwrap_err().exit_code(), 7);
        assert_eq!(out, format!("{root}\n> F four; ELF magic 0x7f454c46; \n"));
    }

    #[test]
    fn verbose_header() {
        let dir = TempDir::new().unwrap();
        let root = root_of(&dir);

        let (result, out) = run_args(&["-v", "-i", &root]);
        result.unwrap();
        assert_eq!(
            out,
            format!(
                "[main] verbose output enabled\n\
                 [main] ino = 1\n\
                 [main] files = 0\n\
                 [main] reading directory {root}\n\
                 {root}\n"
            )
        );
    }

    #[test]
    fn several_directories_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let (a, b) = (root_of(&first), root_of(&second));

        let (result, out) = run_args(&[&a, &b]);
        result.unwrap();
        assert_eq!(out, format!("{a}\n{b}\n"));
    }

    #[test]
    fn no_directories() {
        let (result, out) = run_args(&["-v"]);
        let err = result.unwrap_err();
        assert!(matches!(err, ListError::NoDirectories));
        assert_eq!(err.exit_code(), 3);
        assert!(out.is_empty());
    }

    #[test]
    fn missing_directory_fails_after_earlier_ones() {
        let dir = TempDir::new().unwrap();
        let root = root_of(&dir);
        let missing = dir.path().join("missing");

        let (result, out) = run_args(&[&root, missing.to_str().unwrap()]);
        assert_eq!(result.unwrap_err().exit_code(), 4);
        assert_eq!(out, format!("{root}\n"));
    }

    #[test]
    fn lookup() {
        let (result, out) = run_args(&["--lookup", "7"]);
        result.unwrap();
        assert!(out.starts_with("7: ERROR_FREAD\n"));
    }
}
