use std::path::PathBuf;

use crate::data_model::TextRecord;
use crate::error::{PipelineError, Result};
use crate::pipeline::readers::BaseReader;

/// Reads text records from a named column of a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvReader {
    path: PathBuf,
    text_column: String,
}

impl CsvReader {
    pub fn new(path: impl Into<PathBuf>, text_column: impl Into<String>) -> Self {
        CsvReader {
            path: path.into(),
            text_column: text_column.into(),
        }
    }
}

impl BaseReader for CsvReader {
    fn read_records(&self) -> Result<Vec<TextRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .map_err(|e| PipelineError::source_read(&self.path, e))?;

        let headers = reader
            .headers()
            .map_err(|e| PipelineError::source_read(&self.path, e))?;
        let text_col_idx = headers
            .iter()
            .position(|h| h == self.text_column)
            .ok_or_else(|| {
                PipelineError::source_read(
                    &self.path,
                    format!("Text column '{}' not found in CSV header", self.text_column),
                )
            })?;

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row.map_err(|e| PipelineError::source_read(&self.path, e))?;
            let text = row.get(text_col_idx).ok_or_else(|| {
                PipelineError::source_read(
                    &self.path,
                    format!("Row {} has no value for '{}'", index, self.text_column),
                )
            })?;
            records.push(TextRecord::new(index, text));
        }
        Ok(records)
    }
}
