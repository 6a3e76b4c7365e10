use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("unable to open directory {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to read directory {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
