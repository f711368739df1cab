//! Error types.
//!
//! Word errors are recoverable: the presentation layer shows them and asks
//! again. Match errors end the match without resolving the current round.

use thiserror::Error;

/// Reasons a submitted word is refused.
///
/// Checks run in declaration order; the first failure wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("you must enter a word")]
    MissingWord,

    #[error("the word must contain only letters")]
    NonAlphabetic,

    #[error("the word must be at least {min} letters long")]
    TooShort { min: usize },

    #[error("'{0}' has already been used")]
    AlreadyUsed(String),
}

/// Errors that abort a match.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("match cancelled by player")]
    Cancelled,

    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MatchError>;
