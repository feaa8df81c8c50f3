//! Typed error for caller mistakes.
//!
//! Most failures travel as plain `anyhow::Error`. The one distinction callers need to make is
//! between a bug on their side (a malformed "today", coordinates out of range) and a
//! recoverable failure of the calendar source, so invalid input gets its own type that can be
//! recovered with `downcast_ref::<InvalidInputError>()`.

/// Error type for invalid engine input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInputError {
    /// What was wrong with the input
    pub reason: String,
}

impl InvalidInputError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid input: {}", self.reason)
    }
}

impl std::error::Error for InvalidInputError {}
