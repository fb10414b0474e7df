//! Glue between the input reader, the executor and the CSV writer.
//!
//! Everything here returns errors instead of exiting; the `preprocess` binary
//! alone decides the process exit status.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::config::pipeline::{OutputConfig, PipelineConfig};
use crate::data_model::{RunReport, TextRecord};
use crate::error::Result;
use crate::executor::PipelineExecutor;
use crate::observer::RunObserver;
use crate::pipeline::readers::reader_for;
use crate::pipeline::token::{Annotator, RecordProcessor};
use crate::pipeline::writers::{BaseWriter, CsvWriter};

/// Loads every record named by the input section of `config`.
pub fn load_records(config: &PipelineConfig) -> Result<Vec<TextRecord>> {
    let reader = reader_for(&config.input)?;
    info!(
        path = %config.input.path.display(),
        column = %config.input.text_column,
        "Reading input records"
    );
    let records = reader.read_records()?;
    info!(count = records.len(), "Read {} records", records.len());
    Ok(records)
}

/// Writes a completed run to a timestamped CSV under the output directory.
pub fn write_report(
    output: &OutputConfig,
    report: &RunReport,
    completed_at: DateTime<Local>,
) -> Result<PathBuf> {
    let mut writer = CsvWriter::create_in_dir(&output.dir, &output.prefix, &completed_at)?;
    debug!(path = %writer.path().display(), "Writing cleaned records");
    writer.write_batch(&report.cleaned)?;
    writer.close()
}

/// Runs the whole preprocessing job: read, clean, write.
///
/// Returns the path of the written artifact. Nothing is written when reading
/// fails or the run aborts.
pub fn run_preprocessing<A: Annotator>(
    config: &PipelineConfig,
    records: &[TextRecord],
    annotator: A,
    observer: &mut dyn RunObserver,
) -> Result<PathBuf> {
    info!(annotator = annotator.name(), filter = ?config.filter, "Starting preprocessing");
    let executor = PipelineExecutor::new(RecordProcessor::new(config.filter), annotator);
    let report = executor.run_batch(records, observer)?;
    let path = write_report(&config.output, &report, Local::now())?;
    info!(path = %path.display(), "Output saved");
    Ok(path)
}
