//! Append-mode record file.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::SinkError;

/// Line-oriented output file opened in append mode.
///
/// The file is opened on the first write, so a run that produces no records
/// never creates or touches it. The handle is released on drop.
#[derive(Debug)]
pub struct AppendSink {
    path: PathBuf,
    file: Option<File>,
}

impl AppendSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `line` followed by a newline.
    pub fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        let file = match self.file.take() {
            Some(file) => file,
            None => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)
                    .map_err(|source| SinkError::Open {
                        path: self.path.clone(),
                        source,
                    })?;
                tracing::debug!(path = %self.path.display(), "opened outfile");
                file
            }
        };
        let file = self.file.insert(file);

        let mut record = String::with_capacity(line.len() + 1);
        record.push_str(line);
        record.push('\n');
        file.write_all(record.as_bytes())
            .map_err(|source| SinkError::Write {
                path: self.path.clone(),
                source,
            })
    }
}
