use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::error::{PipelineError, Result};
use crate::pipeline::writers::BaseWriter;

const HEADER: [&str; 2] = ["index", "text"];

/// File name of the cleaned artifact for a run completed at `completed_at`.
pub fn artifact_file_name(prefix: &str, completed_at: &DateTime<Local>) -> String {
    format!("{}_{}.csv", prefix, completed_at.format("%Y%m%d%H%M%S"))
}

/// Writes cleaned records as `index,text` rows.
///
/// Rows go to a `.partial` sibling first; `close` renames it into place. A
/// writer dropped before `close` succeeds removes the partial file, so a
/// failed write never leaves an artifact behind.
pub struct CsvWriter {
    path: PathBuf,
    partial_path: PathBuf,
    writer: Option<csv::Writer<File>>,
    rows_written: usize,
    finished: bool,
}

impl CsvWriter {
    /// Creates a writer for `path`. Fails if `path` already exists.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            return Err(output_error(
                &path,
                PipelineError::Unexpected("output file already exists".to_string()),
            ));
        }

        let mut partial = path.clone().into_os_string();
        partial.push(".partial");
        let partial_path = PathBuf::from(partial);

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&partial_path)
            .map_err(|e| output_error(&path, e.into()))?;

        let mut writer = CsvWriter {
            path,
            partial_path,
            writer: Some(csv::Writer::from_writer(file)),
            rows_written: 0,
            finished: false,
        };
        writer.write_row(&HEADER)?;
        Ok(writer)
    }

    /// Creates `dir` if needed and opens a timestamped artifact inside it.
    pub fn create_in_dir(dir: &Path, prefix: &str, completed_at: &DateTime<Local>) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|e| output_error(dir, e.into()))?;
        CsvWriter::new(dir.join(artifact_file_name(prefix, completed_at)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_row(&mut self, row: &[&str]) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| PipelineError::Unexpected("CSV writer already closed".to_string()))?;
        writer
            .write_record(row)
            .map_err(|e| output_error(&self.path, e.into()))
    }
}

fn output_error(path: &Path, source: PipelineError) -> PipelineError {
    PipelineError::OutputWriteError {
        path: path.to_path_buf(),
        source: Box::new(source),
    }
}

impl BaseWriter for CsvWriter {
    fn write_batch(&mut self, cleaned: &[String]) -> Result<()> {
        for text in cleaned {
            let index = self.rows_written.to_string();
            self.write_row(&[index.as_str(), text.as_str()])?;
            self.rows_written += 1;
        }
        Ok(())
    }

    fn close(mut self) -> Result<PathBuf> {
        if let Some(writer) = self.writer.take() {
            let file = writer
                .into_inner()
                .map_err(|e| output_error(&self.path, e.into_error().into()))?;
            file.sync_all()
                .map_err(|e| output_error(&self.path, e.into()))?;
        }
        fs::rename(&self.partial_path, &self.path)
            .map_err(|e| output_error(&self.path, e.into()))?;
        self.finished = true;
        debug!(path = %self.path.display(), rows = self.rows_written, "Closed CSV writer");
        Ok(self.path.clone())
    }
}

impl Drop for CsvWriter {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        // Close the handle before removing the file.
        self.writer.take();
        if let Err(e) = fs::remove_file(&self.partial_path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %self.partial_path.display(), error = %e, "Failed to remove partial output");
            }
        }
    }
}
