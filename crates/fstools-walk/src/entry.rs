use std::ffi::OsString;
use std::fmt;
use std::fs::{DirEntry, FileType};
use std::path::PathBuf;

/// Coarse entry type as reported by the directory listing (links are not
/// followed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Other,
}

impl EntryKind {
    pub fn tag(self) -> &'static str {
        match self {
            Self::File => "F",
            Self::Dir => "D",
            Self::Other => "?",
        }
    }
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_file() {
            Self::File
        } else if file_type.is_dir() {
            Self::Dir
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One entry of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: OsString,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// File serial (inode) number where the platform exposes one.
    pub serial: Option<u64>,
}

impl DirEntryInfo {
    pub(crate) fn from_entry(entry: &DirEntry, kind: EntryKind) -> Self {
        Self {
            name: entry.file_name(),
            path: entry.path(),
            kind,
            serial: serial_of(entry),
        }
    }
}

#[cfg(unix)]
fn serial_of(entry: &DirEntry) -> Option<u64> {
    use std::os::unix::fs::DirEntryExt;
    Some(entry.ino())
}

#[cfg(not(unix))]
fn serial_of(_entry: &DirEntry) -> Option<u64> {
    None
}
