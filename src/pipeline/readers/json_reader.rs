use std::fs;
use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::data_model::TextRecord;
use crate::error::{PipelineError, Result};
use crate::pipeline::readers::BaseReader;

/// Reads text records from a JSON data frame dump.
///
/// Two layouts are accepted:
/// * records: `[{"text": "..."}, {"text": "..."}]`
/// * columns: `{"text": {"0": "...", "1": "..."}}` (or a plain array per column)
#[derive(Debug, Clone)]
pub struct JsonReader {
    path: PathBuf,
    text_column: String,
}

impl JsonReader {
    pub fn new(path: impl Into<PathBuf>, text_column: impl Into<String>) -> Self {
        JsonReader {
            path: path.into(),
            text_column: text_column.into(),
        }
    }

    fn error(&self, reason: impl ToString) -> PipelineError {
        PipelineError::source_read(&self.path, reason)
    }

    fn expect_text(&self, row: impl std::fmt::Display, value: &Value) -> Result<String> {
        match value {
            Value::String(text) => Ok(text.clone()),
            Value::Null => Err(self.error(format!(
                "Row {} has null value in text column '{}'",
                row, self.text_column
            ))),
            other => Err(self.error(format!(
                "Row {} in text column '{}' is not a string: {}",
                row, self.text_column, other
            ))),
        }
    }

    fn from_rows(&self, rows: &[Value]) -> Result<Vec<String>> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                let value = row
                    .as_object()
                    .and_then(|obj| obj.get(&self.text_column))
                    .ok_or_else(|| {
                        self.error(format!(
                            "Row {} has no field '{}'",
                            i, self.text_column
                        ))
                    })?;
                self.expect_text(i, value)
            })
            .collect()
    }

    fn from_columns(&self, columns: &Map<String, Value>) -> Result<Vec<String>> {
        let column = columns.get(&self.text_column).ok_or_else(|| {
            self.error(format!("Text column '{}' not found", self.text_column))
        })?;

        match column {
            Value::Array(values) => values
                .iter()
                .enumerate()
                .map(|(i, v)| self.expect_text(i, v))
                .collect(),
            Value::Object(by_index) => {
                // Keys are row labels; order numerically, not lexically.
                let mut rows = by_index
                    .iter()
                    .map(|(key, value)| {
                        key.parse::<usize>()
                            .map(|idx| (idx, key, value))
                            .map_err(|_| self.error(format!("Row label '{}' is not an index", key)))
                    })
                    .collect::<Result<Vec<_>>>()?;
                rows.sort_by_key(|(idx, _, _)| *idx);
                rows.into_iter()
                    .map(|(_, key, value)| self.expect_text(key, value))
                    .collect()
            }
            other => Err(self.error(format!(
                "Text column '{}' must be an object or array, found {}",
                self.text_column, other
            ))),
        }
    }
}

impl BaseReader for JsonReader {
    fn read_records(&self) -> Result<Vec<TextRecord>> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.error(e))?;
        let parsed: Value = serde_json::from_str(&content).map_err(|e| self.error(e))?;

        let texts = match &parsed {
            Value::Array(rows) => self.from_rows(rows)?,
            Value::Object(columns) => self.from_columns(columns)?,
            _ => {
                return Err(self.error("Expected a JSON array of rows or an object of columns"));
            }
        };

        Ok(texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| TextRecord::new(index, text))
            .collect())
    }
}
