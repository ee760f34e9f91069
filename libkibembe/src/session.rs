// libkibembe/src/session.rs
//
// Front-end glue: one submit of the input box. Successful translations are
// remembered in the history; failures leave it untouched.

use kibembe_core::{History, HistoryError, HistoryRecord};
use tracing::warn;

use crate::error::{TranslateError, TranslateResult};
use crate::translate::translate;

/// A translation session backed by a [`History`].
#[derive(Debug, Clone)]
pub struct Session {
    history: History,
}

impl Session {
    pub fn new(history: History) -> Self {
        Self { history }
    }

    /// Session with a throwaway in-memory history.
    pub fn in_memory(limit: usize) -> Self {
        Self::new(History::new_in_memory(limit))
    }

    /// Translate `raw` and record the result.
    ///
    /// The history stores the trimmed input as typed (case preserved). A
    /// history write failure is logged and does not fail the translation.
    pub fn translate(&self, raw: &str) -> TranslateResult<String> {
        let input = raw.trim();
        if input.is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let output = translate(input)?;
        if let Err(e) = self.history.record(input, &output) {
            warn!(error = %e, input, "failed to record translation");
        }
        Ok(output)
    }

    /// Recorded translations, most recent first.
    pub fn history(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        self.history.entries()
    }

    pub fn clear_history(&self) -> Result<(), HistoryError> {
        self.history.clear()
    }

    pub fn history_store(&self) -> &History {
        &self.history
    }
}
