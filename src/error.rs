/// Failures surfaced by evaluation, sampling, and decision-point validation.
///
/// None of these are retried: each one is a caller precondition violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Card sets of the wrong size, duplicated cards, or overlapping hands.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Asked a deck for more cards than it holds.
    #[error("cannot take {wanted} cards from a deck of {left}")]
    InsufficientCards { wanted: usize, left: usize },
    /// Unreadable card notation.
    #[error("parse error: {0}")]
    Parse(String),
    /// Interactive prompt failed to read an answer.
    #[error("prompt failed: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, Error>;
