use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::core::Record;
use crate::error::{MapViewError, MapViewResult};

const UTF8_BOM: char = '\u{feff}';

/// Parses comma-delimited text with a header row into records.
///
/// A leading byte-order mark is stripped, fields are trimmed and blank lines
/// are skipped. Values are kept as strings.
pub fn load_records_from_str(input: &str) -> MapViewResult<Vec<Record>> {
    let input = input.strip_prefix(UTF8_BOM).unwrap_or(input);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .trim(Trim::All)
        .from_reader(input.as_bytes());

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<Record>().enumerate() {
        let record = result.map_err(|e| {
            MapViewError::Dataset(format!("failed to parse row {}: {e}", row + 1))
        })?;
        records.push(record);
    }

    debug!(count = records.len(), "parsed dataset rows");
    Ok(records)
}

/// Reads the whole stream, then parses it with [`load_records_from_str`].
pub fn load_records<R: Read>(mut reader: R) -> MapViewResult<Vec<Record>> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| MapViewError::Dataset(format!("failed to read dataset: {e}")))?;
    load_records_from_str(&input)
}

pub fn load_records_from_path(path: &Path) -> MapViewResult<Vec<Record>> {
    let input = fs::read_to_string(path).map_err(|e| {
        MapViewError::Dataset(format!("failed to read `{}`: {e}", path.display()))
    })?;
    load_records_from_str(&input)
}
