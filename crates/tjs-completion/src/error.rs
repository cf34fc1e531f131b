//! Request-level completion errors.

use crate::telemetry::tags;
use std::fmt;

/// Why member completion produced no candidates.
///
/// Only member extraction can fail a request; per-candidate normalization
/// failures are absorbed and show up in telemetry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    NullishReceiver,
    NoCoverage,
    UnhandledType(String),
    UnhandledMembers(String),
}

impl CompletionError {
    /// Telemetry `result` tag.
    pub fn tag(&self) -> &'static str {
        match self {
            CompletionError::NullishReceiver => tags::FAILURE_NULLABLE,
            CompletionError::NoCoverage => tags::FAILURE_NO_COVERAGE,
            CompletionError::UnhandledType(_) => tags::FAILURE_UNHANDLED_TYPE,
            CompletionError::UnhandledMembers(_) => tags::FAILURE_UNHANDLED_MEMBERS,
        }
    }
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionError::NullishReceiver => {
                write!(f, "autocomplete on possibly null or undefined value")
            }
            CompletionError::NoCoverage => {
                write!(f, "not enough type information to autocomplete")
            }
            CompletionError::UnhandledType(desc) => {
                write!(f, "autocomplete on unexpected type of value {desc}")
            }
            CompletionError::UnhandledMembers(desc) => {
                write!(f, "autocomplete on unexpected members of value {desc}")
            }
        }
    }
}

impl std::error::Error for CompletionError {}
