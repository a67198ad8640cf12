use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use linfa::DatasetBase;
use ndarray::prelude::*;
use ndarray_csv::{Array2Reader, ReadError};
use thiserror::Error;

/// A table of samples with named columns and no targets.
pub type Table = DatasetBase<Array2<f64>, Array1<()>>;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("could not open {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid CSV header: {0}")]
    Header(#[from] csv::Error),
    #[error("invalid CSV records: {0}")]
    Records(#[from] ReadError),
}

/// Read a headered CSV file into a [`Table`], column names become feature names.
///
/// Paths ending in `.gz` are treated as gzip compressed.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Table, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let file = BufReader::new(file);

    if path.extension().map_or(false, |ext| ext == "gz") {
        table_from_csv(GzDecoder::new(file), b',')
    } else {
        table_from_csv(file, b',')
    }
}

/// Parse headered CSV bytes into a [`Table`].
pub fn table_from_csv<R: Read>(csv: R, separator: u8) -> Result<Table, DatasetError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(separator)
        .from_reader(csv);

    let feature_names = reader
        .headers()?
        .iter()
        .map(|name| name.trim().to_string())
        .collect::<Vec<_>>();

    // extract ndarray
    let records: Array2<f64> = reader.deserialize_array2_dynamic()?;

    Ok(DatasetBase::from(records).with_feature_names(feature_names))
}
