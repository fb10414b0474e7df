// src/pipeline/readers/parquet_reader.rs

use std::fs::File;
use std::path::PathBuf;

use arrow::array::{Array, LargeStringArray, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatchReader;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::data_model::TextRecord;
use crate::error::{PipelineError, Result};
use crate::pipeline::readers::BaseReader;

/// Reads text records from one string column of a Parquet file.
#[derive(Debug, Clone)]
pub struct ParquetReader {
    path: PathBuf,
    text_column: String,
    batch_size: Option<usize>,
}

impl ParquetReader {
    pub fn new(path: impl Into<PathBuf>, text_column: impl Into<String>) -> Self {
        ParquetReader {
            path: path.into(),
            text_column: text_column.into(),
            batch_size: None,
        }
    }

    /// Optional Arrow batch size for reading.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    fn column_values(&self, column: &dyn Array) -> Result<Vec<Option<String>>> {
        if let Some(texts) = column.as_any().downcast_ref::<StringArray>() {
            Ok(texts.iter().map(|v| v.map(str::to_string)).collect())
        } else if let Some(texts) = column.as_any().downcast_ref::<LargeStringArray>() {
            Ok(texts.iter().map(|v| v.map(str::to_string)).collect())
        } else {
            Err(PipelineError::source_read(
                &self.path,
                format!("Column '{}' is not a valid Utf8 StringArray", self.text_column),
            ))
        }
    }
}

impl BaseReader for ParquetReader {
    fn read_records(&self) -> Result<Vec<TextRecord>> {
        let file = File::open(&self.path).map_err(|e| PipelineError::source_read(&self.path, e))?;
        let builder = ParquetRecordBatchReaderBuilder::try_new(file)
            .map_err(|e| PipelineError::source_read(&self.path, e))?;
        let builder = if let Some(batch_size) = self.batch_size {
            builder.with_batch_size(batch_size)
        } else {
            builder
        };
        let record_batch_reader = builder
            .build()
            .map_err(|e| PipelineError::source_read(&self.path, e))?;
        let schema = record_batch_reader.schema();

        let text_col_idx = schema.index_of(&self.text_column).map_err(|_| {
            PipelineError::source_read(
                &self.path,
                format!("Text column '{}' not found in Parquet schema", self.text_column),
            )
        })?;
        match schema.field(text_col_idx).data_type() {
            DataType::Utf8 | DataType::LargeUtf8 => {}
            other => {
                return Err(PipelineError::source_read(
                    &self.path,
                    format!(
                        "Expected text column '{}' to be Utf8 or LargeUtf8, but found {:?}",
                        self.text_column, other
                    ),
                ));
            }
        }

        let mut records = Vec::new();
        for batch_result in record_batch_reader {
            let batch = batch_result.map_err(|e| PipelineError::source_read(&self.path, e))?;
            for value in self.column_values(batch.column(text_col_idx).as_ref())? {
                let index = records.len();
                let text = value.ok_or_else(|| {
                    PipelineError::source_read(
                        &self.path,
                        format!(
                            "Row {} has null value in text column '{}'",
                            index, self.text_column
                        ),
                    )
                })?;
                records.push(TextRecord::new(index, text));
            }
        }

        Ok(records)
    }
}
