use std::path::PathBuf;

use fstools_common::{
    ExitCodeEntry, ExitCodeTable, ExitStatus, LookupError, GENERIC_FAILURE, ILLEGAL_OPTION,
};

pub const NO_CONTENT_GIVEN: u8 = 3;
pub const NO_FILES_GIVEN: u8 = 4;
pub const FILE_OPEN_FAILURE: u8 = 5;
pub const FILE_WRITE_FAILURE: u8 = 6;
pub const INVALID_LOOKUP_CODE: u8 = 7;

const ENTRIES: &[ExitCodeEntry] = &[
    ExitCodeEntry {
        code: GENERIC_FAILURE,
        name: "nonspecific error",
        details: &["The program has failed for a nonspecific reason."],
    },
    ExitCodeEntry {
        code: ILLEGAL_OPTION,
        name: "ILLEGAL_OPTION",
        details: &[
            "The program was given an unrecognized option or argument.",
            "Run with '-h' or '--help' to see available options.",
        ],
    },
    ExitCodeEntry {
        code: NO_CONTENT_GIVEN,
        name: "NO_CONTENT_GIVEN",
        details: &[
            "The program was not given any content to write.",
            "Run with '-h' or '--help' to see CLI syntax.",
        ],
    },
    ExitCodeEntry {
        code: NO_FILES_GIVEN,
        name: "NO_FILES_GIVEN",
        details: &[
            "The program was not given a file to write to.",
            "Run with '-h' or '--help' to see CLI syntax.",
        ],
    },
    ExitCodeEntry {
        code: FILE_OPEN_FAILURE,
        name: "FILE_OPEN_FAILURE",
        details: &[
            "The program was unable to open a given file for writing.",
            "Ensure the parent directory exists and is writable.",
        ],
    },
    ExitCodeEntry {
        code: FILE_WRITE_FAILURE,
        name: "FILE_WRITE_FAILURE",
        details: &["The program was unable to write the content to a file after opening it."],
    },
    ExitCodeEntry {
        code: INVALID_LOOKUP_CODE,
        name: "INVALID_LOOKUP_CODE",
        details: &["The program was given an unrecognized lookup code."],
    },
];

pub const EXIT_CODES: ExitCodeTable = ExitCodeTable::new(ENTRIES);

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("no content given")]
    NoContent,

    #[error("no file(s) given")]
    NoFiles,

    #[error("failed to open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl ExitStatus for WriteError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::NoContent => NO_CONTENT_GIVEN,
            Self::NoFiles => NO_FILES_GIVEN,
            Self::Open { .. } => FILE_OPEN_FAILURE,
            Self::Write { .. } => FILE_WRITE_FAILURE,
            Self::Lookup(_) => INVALID_LOOKUP_CODE,
            Self::Output(_) => GENERIC_FAILURE,
        }
    }
}
