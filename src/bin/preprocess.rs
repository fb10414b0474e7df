// src/bin/preprocess.rs

//! Cleans review text for topic modeling.
//!
//! Reads the configured input file, lemmatizes and filters every record,
//! and writes one timestamped CSV of cleaned text. The process exits with a
//! non-zero status if the input cannot be read, if too many records fail, or
//! if the output cannot be written.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};
use ReviewBlaster::config::preprocess::Args;
use ReviewBlaster::config::{LoggingConfig, PipelineConfig};
use ReviewBlaster::data_model::{RunReport, RunState};
use ReviewBlaster::error::{PipelineError, Result};
use ReviewBlaster::observer::{RunObserver, TracingObserver};
use ReviewBlaster::pipeline::token::RuleAnnotator;
use ReviewBlaster::preprocess_logic::{load_records, run_preprocessing};
use ReviewBlaster::utils::logging::init_logging;

const BINARY_NAME: &str = "preprocess_text";

/// Creates and configures a new `ProgressBar` for the cleaning loop.
fn create_progress_bar(total_items: u64, message: &str, template: &str) -> ProgressBar {
    let pb = ProgressBar::new(total_items);
    pb.set_message(message.to_string());
    pb.set_style(
        ProgressStyle::default_bar()
            .template(template)
            .unwrap_or_else(|_| ProgressStyle::default_bar()) // Fallback style
            .progress_chars("=> "),
    );
    pb
}

/// Drives the progress bar and forwards events to the tracing observer.
struct ProgressObserver {
    pb: ProgressBar,
    inner: TracingObserver,
}

impl RunObserver for ProgressObserver {
    fn state_changed(&mut self, from: RunState, to: RunState) {
        self.inner.state_changed(from, to);
    }

    fn run_started(&mut self, total: usize) {
        let inner = &mut self.inner;
        self.pb.suspend(|| inner.run_started(total));
    }

    fn record_succeeded(&mut self, index: usize) {
        self.inner.record_succeeded(index);
        self.pb.inc(1);
    }

    fn record_failed(&mut self, index: usize, error: &PipelineError, failures: usize) {
        let inner = &mut self.inner;
        self.pb.suspend(|| inner.record_failed(index, error, failures));
        self.pb.inc(1);
    }

    fn run_completed(&mut self, report: &RunReport) {
        self.pb.finish_with_message(format!(
            "Cleaned {} records ({} failed)",
            report.total(),
            report.failure_count()
        ));
        self.inner.run_completed(report);
    }

    fn run_aborted(&mut self, error: &PipelineError) {
        self.pb.abandon_with_message("Aborted");
        self.inner.run_aborted(error);
    }
}

fn run(config: &PipelineConfig) -> Result<PathBuf> {
    let records = load_records(config)?;

    let template =
        "{spinner:.green} [{elapsed_precise}] {msg} [{bar:40}] {pos}/{len} ({per_sec}, ETA: {eta})";
    let mut observer = ProgressObserver {
        pb: create_progress_bar(records.len() as u64, "Cleaning records", template),
        inner: TracingObserver,
    };

    let annotator = RuleAnnotator::from_config(&config.annotator);
    run_preprocessing(config, &records, annotator, &mut observer)
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.resolve_config();

    // Logging comes up first so a bad config is still reported in the log file.
    let log_dir = match &config {
        Ok(config) => config.logging.dir.clone(),
        Err(_) => args
            .log_dir
            .clone()
            .unwrap_or_else(|| LoggingConfig::default().dir),
    };
    let _guard = match init_logging(BINARY_NAME, &log_dir) {
        Ok((guard, log_file)) => {
            info!(log_file = %log_file.display(), "Logging to file");
            guard
        }
        Err(e) => {
            eprintln!("Failed to initialise logging: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    if args.validate_config {
        info!(input = %config.input.path.display(), "Configuration is valid");
        return ExitCode::SUCCESS;
    }

    match run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Preprocessing failed");
            ExitCode::FAILURE
        }
    }
}
