use tracing::{debug, error, info, warn};

use crate::data_model::{RunReport, RunState};
use crate::error::PipelineError;

/// Receives progress of a pipeline run.
///
/// The executor never logs on its own; whoever drives it decides where the
/// events go. All methods default to doing nothing.
pub trait RunObserver {
    fn state_changed(&mut self, _from: RunState, _to: RunState) {}

    fn run_started(&mut self, _total: usize) {}

    fn record_succeeded(&mut self, _index: usize) {}

    /// `failures` is the cumulative failure count including this record.
    fn record_failed(&mut self, _index: usize, _error: &PipelineError, _failures: usize) {}

    fn run_completed(&mut self, _report: &RunReport) {}

    fn run_aborted(&mut self, _error: &PipelineError) {}
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl RunObserver for NullObserver {}

/// Forwards run events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RunObserver for TracingObserver {
    fn state_changed(&mut self, from: RunState, to: RunState) {
        debug!(?from, ?to, "Run state changed");
    }

    fn run_started(&mut self, total: usize) {
        info!(total, "Preprocessing {} records", total);
    }

    fn record_succeeded(&mut self, index: usize) {
        debug!(index, "Processed record");
    }

    fn record_failed(&mut self, index: usize, error: &PipelineError, failures: usize) {
        warn!(
            index,
            failures,
            error = %error,
            "Could not process text {}; added empty string instead",
            index
        );
    }

    fn run_completed(&mut self, report: &RunReport) {
        info!(
            total = report.total(),
            failures = report.failure_count(),
            "Preprocessing completed"
        );
    }

    fn run_aborted(&mut self, error: &PipelineError) {
        error!(error = %error, "Preprocessing aborted");
    }
}
