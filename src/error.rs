//! Error types for card label parsing.

use thiserror::Error;

/// Errors that can occur when parsing a card label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Label is empty.
    #[error("label is empty")]
    Empty,
    /// Last character of the label is not one of the four suit symbols.
    #[error("unknown suit symbol `{0}`")]
    UnknownSuit(char),
    /// Leading characters of the label are not a rank token.
    #[error("unknown rank token")]
    UnknownRank,
}
