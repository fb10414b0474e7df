// src/pipeline/readers/mod.rs

pub mod base_reader;
pub mod csv_reader;
pub mod json_reader;
pub mod parquet_reader;

pub use base_reader::BaseReader;
pub use csv_reader::CsvReader;
pub use json_reader::JsonReader;
pub use parquet_reader::ParquetReader;

use crate::config::pipeline::{InputConfig, InputFormat};
use crate::error::Result;

/// Picks the reader matching the configured (or inferred) input format.
pub fn reader_for(input: &InputConfig) -> Result<Box<dyn BaseReader>> {
    let path = input.path.clone();
    let column = input.text_column.clone();
    let reader: Box<dyn BaseReader> = match input.resolved_format()? {
        InputFormat::Json => Box::new(JsonReader::new(path, column)),
        InputFormat::Csv => Box::new(CsvReader::new(path, column)),
        InputFormat::Parquet => Box::new(ParquetReader::new(path, column)),
    };
    Ok(reader)
}
