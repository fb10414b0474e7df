use std::path::PathBuf;

use crate::error::Result;

/// Trait for writing batches of cleaned records to an output sink (e.g. file).
pub trait BaseWriter {
    /// Write a batch of cleaned records, continuing the positional index.
    fn write_batch(&mut self, cleaned: &[String]) -> Result<()>;

    /// Finalize and close the output writer, returning where the data landed.
    fn close(self) -> Result<PathBuf>;
}
