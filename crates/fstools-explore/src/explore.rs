//! Filename search over one or more directory trees.

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};

use fstools_common::AppendSink;
use fstools_walk::{DirEntryInfo, EntryKind, WalkEvent, Walker};

use crate::cli::Args;
use crate::errors::{ExploreError, EXIT_CODES};

/// Run the tool against parsed arguments, writing the report to `out`.
pub fn run(args: &Args, out: &mut dyn Write) -> Result<(), ExploreError> {
    if args
        .common
        .answer_info_request::<ExploreError>(&EXIT_CODES, out)?
    {
        return Ok(());
    }

    let filename = args.filename.as_deref().ok_or(ExploreError::NoFilename)?;

    if args.verbose {
        writeln!(out, "verbose = 1")?;
        writeln!(out, "recursive = {}", u8::from(args.recursive))?;
        match &args.outfile {
            Some(path) => writeln!(out, "outfile = {}", path.display())?,
            None => writeln!(out, "outfile = (none)")?,
        }
        writeln!(out, "filename = {}", filename.to_string_lossy())?;
        writeln!(out, "=====")?;
    }

    if args.directories.is_empty() {
        return Err(ExploreError::NoDirectory);
    }

    let mut search = FileSearch {
        filename,
        open_dirs: Vec::new(),
        recursive: args.recursive,
        verbose: args.verbose,
        outfile: args.outfile.as_ref().map(AppendSink::new),
        out,
    };
    for dir in &args.directories {
        search.check_directory(dir)?;
    }
    Ok(())
}

struct FileSearch<'a> {
    filename: &'a OsStr,
    /// Paths of the directories the walker has entered, innermost last,
    /// spelled as the walker produced them.
    open_dirs: Vec<PathBuf>,
    recursive: bool,
    verbose: bool,
    outfile: Option<AppendSink>,
    out: &'a mut dyn Write,
}

impl FileSearch<'_> {
    fn check_directory(&mut self, root: &Path) -> Result<(), ExploreError> {
        for event in Walker::new(root, self.recursive) {
            match event? {
                WalkEvent::Enter(path) => {
                    if self.verbose {
                        writeln!(self.out, "checking directory: {}", path.display())?;
                    }
                    self.open_dirs.push(path);
                }
                WalkEvent::Entry(entry) => {
                    // Recursive mode descends into directories instead of
                    // matching their names.
                    if self.recursive && entry.kind == EntryKind::Dir {
                        continue;
                    }
                    self.check_entry(&entry)?;
                }
                WalkEvent::Leave(_) => {
                    self.open_dirs.pop();
                    if self.verbose {
                        writeln!(self.out, "===")?;
                    }
                }
            }
        }
        Ok(())
    }

    fn check_entry(&mut self, entry: &DirEntryInfo) -> Result<(), ExploreError> {
        // Entries only arrive between an Enter and its Leave.
        let Some(dir) = self.open_dirs.last() else {
            return Ok(());
        };
        let name = entry.name.to_string_lossy();
        if self.verbose {
            writeln!(self.out, "checking {}/{name}", dir.display())?;
        }
        if entry.name.as_os_str() != self.filename {
            return Ok(());
        }
        let filename = self.filename.to_string_lossy();

        tracing::debug!(dir = %dir.display(), name = %name, "found match");
        if self.verbose {
            writeln!(self.out, "[FIND]")?;
        }
        writeln!(self.out, "found {filename} in {}", dir.display())?;
        if self.verbose {
            writeln!(self.out, "[/FIND]")?;
        }

        if let Some(sink) = self.outfile.as_mut() {
            let record = format!("{}/{filename}", dir.display());
            sink.write_line(&record)?;
            if self.verbose {
                writeln!(
                    self.out,
                    "wrote new entry to {}: {record}",
                    sink.path().display()
                )?;
            }
        }
        Ok(())
    }
}
