//! artikel error type.

use std::{io, path::PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to open input file at '{}'", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Input file at '{}' is not a JSON array of vocabulary entries", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Entry {index} ('{word}') has no field '{field}'")]
    MissingField {
        index: usize,
        word: String,
        field: String,
    },
    #[error("Failed to write output file at '{}'", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid condition '{0}', expected the form FIELD=VALUE")]
    InvalidCondition(String),
}
