//! Depth-first directory walk driven by an explicit worklist.

use std::fs::ReadDir;
use std::path::{Path, PathBuf};

use crate::entry::{DirEntryInfo, EntryKind};
use crate::errors::WalkError;

/// Step of a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEvent {
    /// A directory was opened; its entries follow.
    Enter(PathBuf),
    /// An entry of the innermost open directory.
    Entry(DirEntryInfo),
    /// The innermost directory is exhausted and its handle released.
    Leave(PathBuf),
}

#[derive(Debug)]
struct Frame {
    path: PathBuf,
    entries: ReadDir,
}

/// Iterator over the contents of a directory tree.
///
/// Entries come in the order the OS enumerates them (`.` and `..` are
/// never reported). In recursive mode a `Dir` entry is immediately followed
/// by the `Enter` of that directory, and its subtree is finished before the
/// parent continues. Links to directories are not followed.
///
/// After an error the walk should be abandoned; the iterator makes no
/// attempt to resume.
#[derive(Debug)]
pub struct Walker {
    stack: Vec<Frame>,
    pending: Option<PathBuf>,
    recursive: bool,
}

impl Walker {
    pub fn new(root: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            stack: Vec::new(),
            pending: Some(root.into()),
            recursive,
        }
    }

    fn open(&mut self, path: PathBuf) -> Result<WalkEvent, WalkError> {
        let entries = std::fs::read_dir(&path).map_err(|source| WalkError::Open {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), depth = self.stack.len(), "opened directory");
        self.stack.push(Frame {
            path: path.clone(),
            entries,
        });
        Ok(WalkEvent::Enter(path))
    }
}

fn read_error(path: &Path, source: std::io::Error) -> WalkError {
    WalkError::Read {
        path: path.to_path_buf(),
        source,
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEvent, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(path) = self.pending.take() {
            return Some(self.open(path));
        }

        let frame = self.stack.last_mut()?;
        match frame.entries.next() {
            Some(Ok(entry)) => {
                let kind = match entry.file_type() {
                    Ok(file_type) => EntryKind::from(file_type),
                    Err(e) => return Some(Err(read_error(&frame.path, e))),
                };
                let info = DirEntryInfo::from_entry(&entry, kind);
                if self.recursive && kind == EntryKind::Dir {
                    self.pending = Some(info.path.clone());
                }
                Some(Ok(WalkEvent::Entry(info)))
            }
            Some(Err(e)) => Some(Err(read_error(&frame.path, e))),
            None => {
                let frame = self.stack.pop()?;
                tracing::trace!(path = %frame.path.display(), "closed directory");
                Some(Ok(WalkEvent::Leave(frame.path)))
            }
        }
    }
}
