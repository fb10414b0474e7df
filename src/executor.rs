use crate::data_model::{RunReport, RunState, TextRecord};
use crate::error::{PipelineError, Result};
use crate::observer::RunObserver;
use crate::pipeline::token::{Annotator, RecordProcessor};

/// Number of failed records after which a run is abandoned.
pub const MAX_RECORD_FAILURES: usize = 10;

/// Drives the [`RecordProcessor`] over an ordered collection of records.
pub struct PipelineExecutor<A: Annotator> {
    processor: RecordProcessor,
    annotator: A,
    max_failures: usize,
}

impl<A: Annotator> PipelineExecutor<A> {
    pub fn new(processor: RecordProcessor, annotator: A) -> Self {
        PipelineExecutor {
            processor,
            annotator,
            max_failures: MAX_RECORD_FAILURES,
        }
    }

    fn transition(state: &mut RunState, to: RunState, observer: &mut dyn RunObserver) {
        observer.state_changed(*state, to);
        *state = to;
    }

    /// Processes a single record, wrapping any failure with the record index.
    pub fn run_single(&self, record: &TextRecord) -> Result<String> {
        self.processor
            .clean(&self.annotator, &record.text)
            .map_err(|e| PipelineError::RecordFailed {
                index: record.index,
                source: Box::new(e),
            })
    }

    /// Processes every record in order.
    ///
    /// Failed records become empty strings. Once `MAX_RECORD_FAILURES`
    /// records have failed the run stops and `FailureThresholdExceeded` is
    /// returned; no further records are touched.
    pub fn run_batch(
        &self,
        records: &[TextRecord],
        observer: &mut dyn RunObserver,
    ) -> Result<RunReport> {
        let mut state = RunState::NotStarted;
        Self::transition(&mut state, RunState::Running, observer);
        observer.run_started(records.len());

        let mut cleaned = Vec::with_capacity(records.len());
        let mut failed_indices = Vec::new();

        for record in records {
            match self.run_single(record) {
                Ok(text) => {
                    observer.record_succeeded(record.index);
                    cleaned.push(text);
                }
                Err(e) => {
                    failed_indices.push(record.index);
                    observer.record_failed(record.index, &e, failed_indices.len());
                    cleaned.push(String::new());

                    if failed_indices.len() >= self.max_failures {
                        let abort = PipelineError::FailureThresholdExceeded {
                            failures: failed_indices.len(),
                            threshold: self.max_failures,
                            index: record.index,
                        };
                        Self::transition(&mut state, RunState::Aborted, observer);
                        observer.run_aborted(&abort);
                        return Err(abort);
                    }
                }
            }
        }

        Self::transition(&mut state, RunState::Completed, observer);
        let report = RunReport {
            cleaned,
            failed_indices,
            state,
        };
        observer.run_completed(&report);
        Ok(report)
    }
}
