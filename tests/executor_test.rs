use ReviewBlaster::config::FilterConfig;
use ReviewBlaster::data_model::{records_from_texts, RunReport, RunState, TextRecord};
use ReviewBlaster::error::{PipelineError, Result};
use ReviewBlaster::executor::{PipelineExecutor, MAX_RECORD_FAILURES};
use ReviewBlaster::observer::{NullObserver, RunObserver};
use ReviewBlaster::pipeline::token::{Annotator, RecordProcessor, Token, TokenStream};

const STOP_WORDS: &[&str] = &["the", "a", "is", "are", "was"];

// Whitespace tokenizer with fixed classification; any text containing FAIL errors out.
struct ScriptedAnnotator;

impl Annotator for ScriptedAnnotator {
    type Token = Token;

    fn name(&self) -> &'static str {
        "ScriptedAnnotator"
    }

    fn annotate<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a, Token>> {
        if text.contains("FAIL") {
            return Err(PipelineError::AnnotationError(format!(
                "scripted failure for {:?}",
                text
            )));
        }
        Ok(Box::new(text.split_whitespace().map(|word| {
            let lower = word.to_lowercase();
            Ok(Token::new(word, lower.trim_end_matches('s'))
                .stop(STOP_WORDS.contains(&lower.as_str()))
                .punct(word.chars().all(|c| c.is_ascii_punctuation()))
                .digit(word.chars().all(|c| c.is_ascii_digit())))
        })))
    }
}

#[derive(Default)]
struct RecordingObserver {
    transitions: Vec<(RunState, RunState)>,
    started_with: Option<usize>,
    succeeded: Vec<usize>,
    failed: Vec<(usize, usize)>,
    completed: bool,
    aborted: Option<String>,
}

impl RunObserver for RecordingObserver {
    fn state_changed(&mut self, from: RunState, to: RunState) {
        self.transitions.push((from, to));
    }

    fn run_started(&mut self, total: usize) {
        self.started_with = Some(total);
    }

    fn record_succeeded(&mut self, index: usize) {
        self.succeeded.push(index);
    }

    fn record_failed(&mut self, index: usize, _error: &PipelineError, failures: usize) {
        self.failed.push((index, failures));
    }

    fn run_completed(&mut self, _report: &RunReport) {
        self.completed = true;
    }

    fn run_aborted(&mut self, error: &PipelineError) {
        self.aborted = Some(error.to_string());
    }
}

fn content_words_executor() -> PipelineExecutor<ScriptedAnnotator> {
    let config = FilterConfig {
        stopwords: false,
        ..Default::default()
    };
    PipelineExecutor::new(RecordProcessor::new(config), ScriptedAnnotator)
}

fn records_with_failures_at(n: usize, failing: &[usize]) -> Vec<TextRecord> {
    records_from_texts((0..n).map(|i| {
        if failing.contains(&i) {
            format!("record{} FAIL", i)
        } else {
            format!("the word{}", i)
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_records_succeed_in_order() {
        let records = records_with_failures_at(50, &[]);
        let mut observer = RecordingObserver::default();
        let report = content_words_executor()
            .run_batch(&records, &mut observer)
            .unwrap();

        assert_eq!(report.state, RunState::Completed);
        assert_eq!(report.total(), 50);
        assert_eq!(report.failure_count(), 0);
        for (i, cleaned) in report.cleaned.iter().enumerate() {
            assert_eq!(cleaned, &format!("word{}", i));
        }
        assert_eq!(observer.started_with, Some(50));
        assert_eq!(observer.succeeded, (0..50).collect::<Vec<_>>());
        assert!(observer.completed);
        assert!(observer.aborted.is_none());
    }

    #[test]
    fn test_nine_failures_complete_with_empty_rows() {
        let failing = [0, 3, 7, 12, 20, 21, 33, 48, 49];
        let records = records_with_failures_at(50, &failing);
        let mut observer = RecordingObserver::default();
        let report = content_words_executor()
            .run_batch(&records, &mut observer)
            .unwrap();

        assert_eq!(report.state, RunState::Completed);
        assert_eq!(report.cleaned.len(), 50);
        assert_eq!(report.failed_indices, failing.to_vec());
        for (i, cleaned) in report.cleaned.iter().enumerate() {
            if failing.contains(&i) {
                assert!(cleaned.is_empty(), "row {} should be empty", i);
            } else {
                assert_eq!(cleaned, &format!("word{}", i));
            }
        }
        let counts: Vec<usize> = observer.failed.iter().map(|(_, n)| *n).collect();
        assert_eq!(counts, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_tenth_failure_aborts_and_stops_processing() {
        let failing: Vec<usize> = (0..MAX_RECORD_FAILURES).map(|i| i * 2).collect();
        let tenth = *failing.last().unwrap();
        let records = records_with_failures_at(40, &failing);
        let mut observer = RecordingObserver::default();

        let result = content_words_executor().run_batch(&records, &mut observer);
        match result {
            Err(PipelineError::FailureThresholdExceeded {
                failures,
                threshold,
                index,
            }) => {
                assert_eq!(failures, MAX_RECORD_FAILURES);
                assert_eq!(threshold, MAX_RECORD_FAILURES);
                assert_eq!(index, tenth);
            }
            other => panic!("Expected FailureThresholdExceeded, got {:?}", other),
        }

        // Records after the tenth failure are never looked at.
        assert!(observer.succeeded.iter().all(|&i| i < tenth));
        assert_eq!(observer.failed.len(), MAX_RECORD_FAILURES);
        assert!(!observer.completed);
        assert!(observer.aborted.is_some());
    }

    #[test]
    fn test_abort_when_tenth_failure_is_last_record() {
        let records = records_with_failures_at(10, &(0..10).collect::<Vec<_>>());
        let result = content_words_executor().run_batch(&records, &mut NullObserver);
        assert!(matches!(
            result,
            Err(PipelineError::FailureThresholdExceeded { index: 9, .. })
        ));
    }

    #[test]
    fn test_state_transitions() {
        let mut observer = RecordingObserver::default();
        content_words_executor()
            .run_batch(&records_with_failures_at(3, &[1]), &mut observer)
            .unwrap();
        assert_eq!(
            observer.transitions,
            vec![
                (RunState::NotStarted, RunState::Running),
                (RunState::Running, RunState::Completed),
            ]
        );

        let mut observer = RecordingObserver::default();
        let all_fail: Vec<usize> = (0..12).collect();
        let _ = content_words_executor()
            .run_batch(&records_with_failures_at(12, &all_fail), &mut observer);
        assert_eq!(
            observer.transitions,
            vec![
                (RunState::NotStarted, RunState::Running),
                (RunState::Running, RunState::Aborted),
            ]
        );
    }

    #[test]
    fn test_runs_are_repeatable() {
        let records = records_from_texts(vec!["The cats are here", "A dog is 4 years", "!!"]);
        let executor = content_words_executor();
        let first = executor.run_batch(&records, &mut NullObserver).unwrap();
        let second = executor.run_batch(&records, &mut NullObserver).unwrap();
        assert_eq!(first.cleaned, second.cleaned);
        assert_eq!(first.cleaned, vec!["cat here", "dog year", ""]);
    }

    #[test]
    fn test_default_config_keeps_only_stop_words() {
        let executor = PipelineExecutor::new(RecordProcessor::default(), ScriptedAnnotator);
        let records = records_from_texts(vec!["The cats are here 42 !"]);
        let report = executor.run_batch(&records, &mut NullObserver).unwrap();
        assert_eq!(report.cleaned, vec!["the are"]);
    }
}
