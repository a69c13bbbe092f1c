//! Reading line-item records from CSV.
//!
//! Rows are returned as raw strings. Deciding which rows are usable is left
//! to the layout engine, which skips rows that are not three fields wide.

use crate::error::PipelineError;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const CSV_EXTENSION: &str = "csv";

/// Resolves `path` to an absolute path and checks it names an existing
/// `.csv` file.
pub fn validate_input_path(path: &Path) -> Result<PathBuf, PipelineError> {
    let path = std::path::absolute(path)?;
    if !path.exists() {
        return Err(PipelineError::InputNotFound(path.display().to_string()));
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(CSV_EXTENSION) => Ok(path),
        other => Err(PipelineError::InvalidInputType(
            other.map(|ext| format!(".{ext}")).unwrap_or_default(),
        )),
    }
}

/// Reads header-less CSV rows of any width.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Vec<String>>, PipelineError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result?;
        records.push(record.iter().map(str::to_owned).collect());
    }
    log::debug!("Read {} CSV records", records.len());
    Ok(records)
}

pub fn read_records_from_path(path: &Path) -> Result<Vec<Vec<String>>, PipelineError> {
    read_records(File::open(path)?)
}
