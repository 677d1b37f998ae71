//! Reading vocabulary files and writing results.

use crate::{Error, Result, VocabularyRecord};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

/// Loads the vocabulary records from a JSON file containing an array of entries.
pub fn load(path: &Path) -> Result<Vec<VocabularyRecord>> {
    tracing::info!("loading {}", path.display());
    let file = File::open(path).map_err(|source| Error::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let records = from_reader(BufReader::new(file)).map_err(|source| Error::MalformedInput {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("loaded {} records", records.len());
    Ok(records)
}

pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Vec<VocabularyRecord>> {
    serde_json::from_reader(reader)
}

/// Writes the items to a file as a pretty-printed JSON array.
/// Non-ASCII characters are written as is.
pub fn store<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    tracing::info!("writing {} items to {}", items.len(), path.display());
    let output_failure = |source: std::io::Error| Error::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(output_failure)?;
    to_writer(BufWriter::new(file), items).map_err(output_failure)
}

pub fn to_writer<W: Write, T: Serialize>(mut writer: W, items: &[T]) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, items)?;
    writer.flush()
}
