//! Header probe for regular files.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

const MAGIC_LEN: u64 = 4;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("failed to open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failure while reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failure while reading file {}: got {read} bytes", path.display())]
    ShortRead { path: PathBuf, read: usize },

    /// The magic was read but the class byte after it is missing.
    #[error("failure while reading file {}: got 0 bytes", path.display())]
    MissingClass { path: PathBuf, magic: Magic },
}

impl ProbeError {
    /// Magic bytes that were read before the failure.
    pub fn magic(&self) -> Option<Magic> {
        match self {
            Self::MissingClass { magic, .. } => Some(*magic),
            _ => None,
        }
    }
}

/// The first four bytes of a file, printed as one hex number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magic(pub [u8; 4]);

impl fmt::Display for Magic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "ELF magic {a:#04x}{b:02x}{c:02x}{d:02x}; ")
    }
}

/// First bytes of a regular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileProbe {
    Empty,
    Header { magic: Magic, class: u8 },
}

impl fmt::Display for FileProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("(empty); "),
            Self::Header { magic, class } => write!(f, "{magic}class {class:#04x}; "),
        }
    }
}

/// Read the 4-byte magic and the class byte that follows it.
///
/// An empty file is [`FileProbe::Empty`]. A file with 1 to 3 bytes is a
/// [`ProbeError::ShortRead`]; one with exactly 4 is a
/// [`ProbeError::MissingClass`] that still carries the magic.
pub fn probe_file(path: &Path) -> Result<FileProbe, ProbeError> {
    let mut file = File::open(path).map_err(|source| ProbeError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut magic = Vec::with_capacity(MAGIC_LEN as usize);
    read_some(&mut file, MAGIC_LEN, &mut magic, path)?;
    match magic.len() {
        0 => return Ok(FileProbe::Empty),
        4 => {}
        read => {
            return Err(ProbeError::ShortRead {
                path: path.to_path_buf(),
                read,
            })
        }
    }

    let magic = Magic([magic[0], magic[1], magic[2], magic[3]]);

    let mut class = Vec::with_capacity(1);
    read_some(&mut file, 1, &mut class, path)?;
    let Some(&class) = class.first() else {
        return Err(ProbeError::MissingClass {
            path: path.to_path_buf(),
            magic,
        });
    };

    tracing::trace!(path = %path.display(), "probed file header");
    Ok(FileProbe::Header { magic, class })
}

fn read_some(file: &mut File, limit: u64, buf: &mut Vec<u8>, path: &Path) -> Result<(), ProbeError> {
    file.take(limit)
        .read_to_end(buf)
        .map(|_| ())
        .map_err(|source| ProbeError::Read {
            path: path.to_path_buf(),
            source,
        })
}
