use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("invalid exit code")]
    NotACode(String),

    #[error("invalid exit code: {0}")]
    Unknown(i64),
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to open outfile {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to outfile {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
