use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("failed to open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_error_display() {
        let err = ScanError::Open {
            path: PathBuf::from("notes.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "failed to open file notes.txt: no such file");

        let err = ScanError::Read {
            path: PathBuf::from("notes.txt"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad sector"),
        };
        assert_eq!(err.to_string(), "failed to read file notes.txt: bad sector");
    }
}
