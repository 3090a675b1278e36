//! Data Loader Module
//! Loads match exports with Polars and precomputed dataset tables from JSON.

use crate::data::{DatasetTable, TableError};
use polars::prelude::*;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid dataset table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid dataset table: {0}")]
    Table(#[from] TableError),
}

/// Reads match exports and dataset tables from disk.
pub struct DataLoader;

impl DataLoader {
    /// Read a CSV file into a DataFrame.
    pub fn read_csv(file_path: &Path) -> Result<DataFrame, LoaderError> {
        // Use lazy evaluation for memory efficiency, then collect
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        info!(path = %file_path.display(), rows = df.height(), "loaded match export");
        Ok(df)
    }

    /// Load a precomputed dataset table and check its alignment.
    pub fn load_table_json(file_path: &Path) -> Result<DatasetTable, LoaderError> {
        let text = fs::read_to_string(file_path)?;
        let table: DatasetTable = serde_json::from_str(&text)?;
        table.validate()?;
        info!(
            path = %file_path.display(),
            labels = table.labels().len(),
            kinds = table.kinds().len(),
            "loaded dataset table"
        );
        Ok(table)
    }

    /// Write a dataset table as pretty JSON.
    pub fn save_table_json(table: &DatasetTable, file_path: &Path) -> Result<(), LoaderError> {
        fs::write(file_path, table.to_json()?)?;
        Ok(())
    }
}
