//! Structural statistics of a word.

use serde::{Deserialize, Serialize};

/// Letters counted as vowels (`y` included).
pub const VOWELS: &[u8] = b"aeiouy";

/// Letters considered high-value.
pub const RARE_LETTERS: &[u8] = b"jkqxwzvyf";

/// Scrabble point value of each letter, `a` through `z`.
pub const LETTER_SCORES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, // a-m
    1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10, // n-z
];

/// Snapshot of a word's statistics, taken when the word is submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordStats {
    pub length: usize,
    pub vowel_count: usize,
    pub consonant_count: usize,
    pub rare_letter_count: usize,
    pub is_palindrome: bool,
    /// Letters equal to the first letter, the first one included.
    pub alliteration_count: usize,
    pub scrabble_score: u32,
}

/// Scrabble value of a single character. Anything outside `a..=z` scores 0.
#[must_use]
pub fn letter_score(c: char) -> u32 {
    if c.is_ascii_lowercase() {
        LETTER_SCORES[(c as u8 - b'a') as usize]
    } else {
        0
    }
}

fn is_in(set: &[u8], c: char) -> bool {
    c.is_ascii() && set.contains(&(c as u8))
}

/// Compute the statistics of a word.
///
/// The word is expected to be lowercase and alphabetic already; validation
/// is the caller's job.
///
/// ```
/// use word_combat::words::analyze;
///
/// let stats = analyze("kayak");
/// assert!(stats.is_palindrome);
/// assert_eq!(stats.rare_letter_count, 3);
/// assert_eq!(stats.alliteration_count, 2);
/// ```
#[must_use]
pub fn analyze(word: &str) -> WordStats {
    let chars: Vec<char> = word.chars().collect();

    let vowel_count = chars.iter().filter(|&&c| is_in(VOWELS, c)).count();
    let consonant_count = chars
        .iter()
        .filter(|&&c| c.is_alphabetic() && !is_in(VOWELS, c))
        .count();
    let rare_letter_count = chars.iter().filter(|&&c| is_in(RARE_LETTERS, c)).count();
    let is_palindrome = chars.iter().eq(chars.iter().rev());
    let alliteration_count = match chars.first() {
        Some(&first) => chars.iter().filter(|&&c| c == first).count(),
        None => 0,
    };
    let scrabble_score = chars.iter().map(|&c| letter_score(c)).sum();

    WordStats {
        length: chars.len(),
        vowel_count,
        consonant_count,
        rare_letter_count,
        is_palindrome,
        alliteration_count,
        scrabble_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_counts() {
        let stats = analyze("sword");
        assert_eq!(stats.length, 5);
        assert_eq!(stats.vowel_count, 1);
        assert_eq!(stats.consonant_count, 4);
        assert_eq!(stats.rare_letter_count, 1); // w
        assert!(!stats.is_palindrome);
        assert_eq!(stats.alliteration_count, 1);
        // s1 w4 o1 r1 d2
        assert_eq!(stats.scrabble_score, 9);
    }

    #[test]
    fn test_y_is_vowel_and_rare() {
        let stats = analyze("gym");
        assert_eq!(stats.vowel_count, 1);
        assert_eq!(stats.consonant_count, 2);
        assert_eq!(stats.rare_letter_count, 1);
    }

    #[test]
    fn test_palindrome() {
        assert!(analyze("radar").is_palindrome);
        assert!(analyze("aa").is_palindrome);
        assert!(!analyze("ab").is_palindrome);
    }

    #[test]
    fn test_alliteration_counts_first_letter() {
        assert_eq!(analyze("banana").alliteration_count, 1);
        assert_eq!(analyze("anagram").alliteration_count, 3);
        assert_eq!(analyze("a").alliteration_count, 1);
    }

    #[test]
    fn test_scrabble_extremes() {
        assert_eq!(analyze("quiz").scrabble_score, 10 + 1 + 1 + 10);
        assert_eq!(letter_score('é'), 0);
        assert_eq!(letter_score('Q'), 0);
    }

    #[test]
    fn test_letter_table_covers_alphabet() {
        let total: u32 = ('a'..='z').map(letter_score).sum();
        assert_eq!(total, LETTER_SCORES.iter().sum::<u32>());
        assert_eq!(letter_score('z'), 10);
        assert_eq!(letter_score('d'), 2);
    }

    #[test]
    fn test_empty_word() {
        let stats = analyze("");
        assert_eq!(stats.length, 0);
        assert_eq!(stats.alliteration_count, 0);
        assert!(stats.is_palindrome);
    }
}
