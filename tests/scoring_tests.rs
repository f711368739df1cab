//! Scoring property tests.
//!
//! Properties of `analyze` and `DamageCalculator` over arbitrary valid words.

use proptest::prelude::*;

use word_combat::words::analyzer::LETTER_SCORES;
use word_combat::{analyze, validate, CombatMode, DamageCalculator, MatchConfig, UsedWords};

fn any_mode() -> impl Strategy<Value = CombatMode> {
    prop::sample::select(CombatMode::ALL.to_vec())
}

proptest! {
    /// Scrabble score is the sum of the letter table.
    #[test]
    fn prop_scrabble_score_sums_table(word in "[a-z]{1,30}") {
        let expected: u32 = word.bytes().map(|b| LETTER_SCORES[(b - b'a') as usize]).sum();
        prop_assert_eq!(analyze(&word).scrabble_score, expected);
    }

    /// Palindrome flag matches reversal.
    #[test]
    fn prop_palindrome_iff_reverse(word in "[a-z]{1,12}") {
        let reversed: String = word.chars().rev().collect();
        prop_assert_eq!(analyze(&word).is_palindrome, word == reversed);
    }

    /// Mirrored words are always palindromes.
    #[test]
    fn prop_mirrored_is_palindrome(half in "[a-z]{1,10}", middle in "[a-z]?") {
        let word = format!("{}{}{}", half, middle, half.chars().rev().collect::<String>());
        prop_assert!(analyze(&word).is_palindrome);
    }

    /// Vowels and consonants partition an alphabetic word.
    #[test]
    fn prop_vowels_plus_consonants_is_length(word in "[a-z]{2,30}") {
        let stats = analyze(&word);
        prop_assert_eq!(stats.vowel_count + stats.consonant_count, stats.length);
        prop_assert!(stats.alliteration_count >= 1);
        prop_assert!(stats.alliteration_count <= stats.length);
    }

    /// Damage always lies in [base, cap] for valid words.
    #[test]
    fn prop_damage_in_bounds(word in "[a-z]{2,40}", mode in any_mode()) {
        let damage = DamageCalculator::default().compute(mode, &analyze(&word));
        prop_assert!((10..=50).contains(&damage), "damage {} out of range", damage);
    }

    /// Appending a letter never lowers damage in length mode.
    #[test]
    fn prop_length_damage_monotonic(word in "[a-z]{2,20}", extra in "[a-z]") {
        let calc = DamageCalculator::default();
        let longer = format!("{}{}", word, extra);
        prop_assert!(
            calc.compute(CombatMode::Length, &analyze(&longer))
                >= calc.compute(CombatMode::Length, &analyze(&word))
        );
    }

    /// Appending a vowel never lowers damage in vowel mode.
    #[test]
    fn prop_vowel_damage_monotonic(word in "[a-z]{2,20}", vowel in "[aeiouy]") {
        let calc = DamageCalculator::default();
        let more = format!("{}{}", word, vowel);
        prop_assert!(
            calc.compute(CombatMode::Vowels, &analyze(&more))
                >= calc.compute(CombatMode::Vowels, &analyze(&word))
        );
    }

    /// Appending a consonant never lowers damage in consonant mode.
    #[test]
    fn prop_consonant_damage_monotonic(word in "[a-z]{2,20}", consonant in "[b-df-hj-np-tv-xz]") {
        let calc = DamageCalculator::default();
        let more = format!("{}{}", word, consonant);
        prop_assert!(
            calc.compute(CombatMode::Consonants, &analyze(&more))
                >= calc.compute(CombatMode::Consonants, &analyze(&word))
        );
    }

    /// Appending a rare letter never lowers damage in rare-letter mode.
    #[test]
    fn prop_rare_letter_damage_monotonic(word in "[a-z]{2,20}", rare in "[jkqxwzvyf]") {
        let calc = DamageCalculator::default();
        let more = format!("{}{}", word, rare);
        prop_assert!(
            calc.compute(CombatMode::RareLetters, &analyze(&more))
                >= calc.compute(CombatMode::RareLetters, &analyze(&word))
        );
    }

    /// Repeating the first letter never lowers damage in alliteration mode.
    #[test]
    fn prop_alliteration_damage_monotonic(word in "[a-z]{2,20}") {
        let calc = DamageCalculator::default();
        let first = &word[..1];
        let more = format!("{}{}", word, first);
        prop_assert!(analyze(&more).alliteration_count > analyze(&word).alliteration_count);
        prop_assert!(
            calc.compute(CombatMode::Alliteration, &analyze(&more))
                >= calc.compute(CombatMode::Alliteration, &analyze(&word))
        );
    }

    /// Appending any letter never lowers damage in scrabble mode.
    #[test]
    fn prop_scrabble_damage_monotonic(word in "[a-z]{2,20}", extra in "[a-z]") {
        let calc = DamageCalculator::default();
        let more = format!("{}{}", word, extra);
        prop_assert!(
            calc.compute(CombatMode::ScrabbleScore, &analyze(&more))
                >= calc.compute(CombatMode::ScrabbleScore, &analyze(&word))
        );
    }

    /// Damage stays within [base, cap] for any custom cap.
    #[test]
    fn prop_damage_respects_custom_cap(word in "[a-z]{2,40}", mode in any_mode(), cap in 10u32..=80) {
        let calc = DamageCalculator::new(&MatchConfig::default().with_damage_cap(cap));
        let damage = calc.compute(mode, &analyze(&word));
        prop_assert!((10..=cap).contains(&damage), "damage {} outside [10, {}]", damage, cap);
    }

    /// Validation lowercases and accepts any unused alphabetic word.
    #[test]
    fn prop_validate_accepts_alphabetic(word in "[a-zA-Z]{2,20}") {
        let used = UsedWords::new();
        prop_assert_eq!(validate(&word, &used, 2), Ok(word.to_lowercase()));
    }

    /// Once used, a word is rejected in any casing.
    #[test]
    fn prop_used_word_rejected_any_case(word in "[a-z]{2,12}", mask in prop::collection::vec(any::<bool>(), 12)) {
        let mut used = UsedWords::new();
        used.insert(&word);
        let recased: String = word
            .chars()
            .zip(mask.iter())
            .map(|(c, &upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert!(validate(&recased, &used, 2).is_err());
    }
}

/// Test the worked examples from the game rules.
#[test]
fn test_rule_examples() {
    let calc = DamageCalculator::new(&MatchConfig::default());

    // 10 + 3*14 = 52 plus the long-word bonus, still capped at 50
    assert_eq!(calc.compute(CombatMode::Length, &analyze("extraordinaire")), 50);
    assert_eq!(analyze("extraordinaire").length, 14);

    assert_eq!(calc.compute(CombatMode::Palindrome, &analyze("kayak")), 40);

    assert_eq!(calc.compute(CombatMode::Vowels, &analyze("aeiou")), 35);
    assert_eq!(calc.compute(CombatMode::Vowels, &analyze("oeiau")), 35);

    assert!(analyze("radar").is_palindrome);
    assert!(!analyze("sword").is_palindrome);
}

/// Test every mode term against a hand-computed word.
#[test]
fn test_mode_terms() {
    // "quizzes": q u i z z e s
    let stats = analyze("quizzes");
    assert_eq!(stats.length, 7);
    assert_eq!(stats.vowel_count, 3);
    assert_eq!(stats.consonant_count, 4);
    assert_eq!(stats.rare_letter_count, 3);
    assert_eq!(stats.alliteration_count, 1);
    assert_eq!(stats.scrabble_score, 10 + 1 + 1 + 10 + 10 + 1 + 1);

    assert_eq!(DamageCalculator::mode_term(CombatMode::Length, &stats), 21);
    assert_eq!(DamageCalculator::mode_term(CombatMode::Vowels, &stats), 15);
    assert_eq!(DamageCalculator::mode_term(CombatMode::Consonants, &stats), 16);
    assert_eq!(DamageCalculator::mode_term(CombatMode::RareLetters, &stats), 24);
    assert_eq!(DamageCalculator::mode_term(CombatMode::Palindrome, &stats), 0);
    assert_eq!(DamageCalculator::mode_term(CombatMode::Alliteration, &stats), 6);
    assert_eq!(DamageCalculator::mode_term(CombatMode::ScrabbleScore, &stats), 68);
}
