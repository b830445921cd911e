//! Error types for asking questions.

use std::io;

use crate::question::Choice;

/// Errors that end an ask cycle.
///
/// Invalid answers (unparseable numbers, out-of-range values, unmatched
/// choices) never show up here: they only consume an attempt. A caller sees
/// an error either because the line source gave out or because every attempt
/// was used up.
#[derive(Debug, thiserror::Error)]
pub enum InterviewError {
    /// Reading from the line source failed.
    #[error("Failed to read input: {0}")]
    Input(#[source] io::Error),

    /// The line source was closed before a line could be read.
    #[error("Input closed before an answer was given.")]
    EndOfInput,

    /// The retry budget ran out without an acceptable answer.
    ///
    /// `last_input` and `last_parsed` describe the final attempt and exist
    /// for diagnostics only.
    #[error("Max tries reached: no valid answer after {attempts} attempt(s).")]
    MaxRetriesExceeded {
        attempts: u32,
        last_input: String,
        last_parsed: Option<i64>,
    },
}

impl InterviewError {
    /// Create a retry exhaustion error.
    pub fn max_retries(attempts: u32, last_input: impl Into<String>) -> Self {
        Self::MaxRetriesExceeded {
            attempts,
            last_input: last_input.into(),
            last_parsed: None,
        }
    }

    /// Whether this error came from running out of attempts.
    pub fn is_max_retries(&self) -> bool {
        matches!(self, Self::MaxRetriesExceeded { .. })
    }

    /// The raw text of the last attempt, if the budget ran out.
    pub fn last_input(&self) -> Option<&str> {
        match self {
            Self::MaxRetriesExceeded { last_input, .. } => Some(last_input),
            _ => None,
        }
    }

    /// The last successfully parsed integer, if the budget ran out on an
    /// integer question.
    pub fn last_parsed(&self) -> Option<i64> {
        match self {
            Self::MaxRetriesExceeded { last_parsed, .. } => *last_parsed,
            _ => None,
        }
    }

    /// A choice named after the last raw input, without a value.
    ///
    /// Never a valid answer; useful for telling the user what was rejected.
    pub fn last_choice<V>(&self) -> Option<Choice<V>> {
        self.last_input().map(Choice::named)
    }
}

/// Result type for ask operations.
pub type Result<T> = std::result::Result<T, InterviewError>;
