use crate::logic::run_file::RunFileError;
use sampletoolkit_common::TableError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeUtilsError {
    #[error("I/O Error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV Error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Table Error: {0}")]
    TableError(#[from] TableError),
    #[error("Invalid barcode \"{value}\" in {path}")]
    InvalidBarcode { value: String, path: String },
    #[error("Barcode {barcode} has no visit in {path}")]
    EmptyVisit { barcode: u32, path: String },
    #[error("cannot split {}: {reason}", .path.display())]
    Unparseable { path: PathBuf, reason: RunFileError },
    #[error("Sample not found for barcode {barcode} ({})", .path.display())]
    SampleNotFound { barcode: u32, path: PathBuf },
}
