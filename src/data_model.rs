use serde::{Deserialize, Serialize};

/// One unit of input text, identified by its position in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    pub index: usize,
    pub text: String,
}

impl TextRecord {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        TextRecord {
            index,
            text: text.into(),
        }
    }
}

/// Builds positional records from an ordered collection of strings.
pub fn records_from_texts<I, S>(texts: I) -> Vec<TextRecord>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| TextRecord::new(index, text))
        .collect()
}

/// Lifecycle of a single pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    NotStarted,
    Running,
    Completed,
    Aborted,
}

/// What a completed run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// One entry per input record, in input order. Failed records are empty.
    pub cleaned: Vec<String>,
    /// Input indices of records that failed processing.
    pub failed_indices: Vec<usize>,
    pub state: RunState,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.cleaned.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed_indices.len()
    }
}
