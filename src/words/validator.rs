//! Structural word legality.
//!
//! A word is legal when it is non-empty, made only of ASCII letters, at
//! least `min_len` long and not yet used in the match. No dictionary lookup
//! is performed.

use super::used::UsedWords;
use crate::core::error::WordError;

/// Validate raw player input and return the normalized (trimmed, lowercased) word.
///
/// Does not record the word; the caller inserts it into `used` once accepted.
///
/// ```
/// use word_combat::words::{validate, UsedWords};
/// use word_combat::core::WordError;
///
/// let mut used = UsedWords::new();
/// assert_eq!(validate("  Sword ", &used, 2), Ok("sword".to_string()));
///
/// used.insert("sword");
/// assert_eq!(validate("SWORD", &used, 2), Err(WordError::AlreadyUsed("sword".into())));
/// ```
pub fn validate(raw: &str, used: &UsedWords, min_len: usize) -> Result<String, WordError> {
    let word = raw.trim();

    if word.is_empty() {
        return Err(WordError::MissingWord);
    }

    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(WordError::NonAlphabetic);
    }

    // ASCII only past this point, so byte length is character count
    if word.len() < min_len {
        return Err(WordError::TooShort { min: min_len });
    }

    let word = word.to_ascii_lowercase();
    if used.contains(&word) {
        return Err(WordError::AlreadyUsed(word));
    }

    Ok(word)
}
