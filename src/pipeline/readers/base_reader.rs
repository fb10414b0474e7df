use crate::data_model::TextRecord;
use crate::error::Result;

/// Trait for loading the ordered text records of one run.
///
/// Any failure is a source-read failure: the run never starts on partial input.
pub trait BaseReader {
    fn read_records(&self) -> Result<Vec<TextRecord>>;
}
