use std::{fs::File, path::Path};

use csv::QuoteStyle;
use flate2::{write::GzEncoder, Compression};

use crate::model::NetworkError;

pub type GzCsvWriter = csv::Writer<GzEncoder<File>>;

/// creates the output directory if it does not exist
pub fn create_dirs(directory: &Path) -> Result<(), NetworkError> {
    if !directory.is_dir() {
        std::fs::create_dir_all(directory).map_err(|e| {
            NetworkError::SinkError(format!(
                "unable to create directory {}: {e}",
                directory.to_string_lossy()
            ))
        })?;
    }
    Ok(())
}

/// opens a gzipped CSV writer at `directory/filename`. fails when the file
/// already exists and `overwrite` is false.
pub fn create_writer(
    directory: &Path,
    filename: &str,
    has_headers: bool,
    quote_style: QuoteStyle,
    overwrite: bool,
) -> Result<GzCsvWriter, NetworkError> {
    let filepath = directory.join(filename);
    if filepath.exists() && !overwrite {
        return Err(NetworkError::SinkError(format!(
            "{} already exists and overwrite is disabled",
            filepath.to_string_lossy()
        )));
    }
    let file = File::create(&filepath).map_err(|e| {
        NetworkError::SinkError(format!(
            "unable to create {}: {e}",
            filepath.to_string_lossy()
        ))
    })?;
    let buffer = GzEncoder::new(file, Compression::default());
    let writer = csv::WriterBuilder::new()
        .has_headers(has_headers)
        .quote_style(quote_style)
        .from_writer(buffer);
    Ok(writer)
}

/// flushes the CSV writer and writes the gzip trailer
pub fn close_writer(writer: GzCsvWriter, filename: &str) -> Result<(), NetworkError> {
    let encoder = writer.into_inner().map_err(|e| {
        NetworkError::SinkError(format!("failure flushing {filename}: {}", e.error()))
    })?;
    encoder
        .finish()
        .map_err(|e| NetworkError::SinkError(format!("failure closing {filename}: {e}")))?;
    Ok(())
}
