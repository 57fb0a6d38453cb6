//! CSV decoding into a [`RawTable`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::IoError;
use crate::record::RawTable;

/// Reads CSV text with a header row into a [`RawTable`].
///
/// Rows may carry more or fewer fields than the header. Field text is kept
/// verbatim; trimming and type coercion happen during loading.
///
/// # Errors
///
/// Returns [`IoError::Csv`] when the input is not valid CSV (for example,
/// invalid UTF-8).
pub fn read_csv<R: Read>(reader: R) -> Result<RawTable, IoError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(String::from).collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(String::from).collect());
    }

    debug!(n_columns = headers.len(), n_rows = rows.len(), "read csv table");
    Ok(RawTable::new(headers, rows))
}

/// Reads CSV bytes held in memory, e.g. an uploaded file.
///
/// # Errors
///
/// See [`read_csv`].
pub fn read_csv_bytes(bytes: &[u8]) -> Result<RawTable, IoError> {
    read_csv(bytes)
}

/// Reads a CSV file from disk.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist, otherwise the
/// errors of [`read_csv`].
pub fn read_csv_file(path: &Path) -> Result<RawTable, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    read_csv(file)
}
