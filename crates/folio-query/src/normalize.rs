//! Query cleaning and tokenization.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Queries whose normalized form is shorter than this (in characters) yield no tokens.
pub const MIN_QUERY_LENGTH: usize = 3;

/// Tokens shorter than this (in characters) are skipped during matching.
pub const MIN_TOKEN_LENGTH: usize = 3;

/// Runs of characters that are neither letters, numbers nor symbols.
static NON_WORD_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{N}\p{S}]+").expect("non-word pattern is a valid regex")
});

/// A query reduced to searchable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedQuery {
    /// The cleaned query: letters, numbers and symbols separated by single spaces.
    pub normalized: String,
    /// Candidate tokens in match order. Empty when the query is too short.
    pub tokens: Vec<String>,
}

impl NormalizedQuery {
    /// Returns true if the query produced no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over tokens long enough to be matched, in token order.
    pub fn searchable_tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .filter(|token| token.chars().count() >= MIN_TOKEN_LENGTH)
    }
}

/// Replaces every non letter/number/symbol run with one space and trims the result.
pub fn clean(raw: &str) -> String {
    NON_WORD_RUN.replace_all(raw, " ").trim().to_string()
}

/// Normalizes a raw query and splits it into match tokens.
///
/// A query with more than one word gets the full normalized query appended as
/// an extra token. Queries shorter than [`MIN_QUERY_LENGTH`] characters after
/// cleaning produce no tokens; that is an empty search, not an error.
pub fn normalize(raw: &str) -> NormalizedQuery {
    let normalized = clean(raw);

    if normalized.chars().count() < MIN_QUERY_LENGTH {
        return NormalizedQuery {
            normalized,
            tokens: Vec::new(),
        };
    }

    let mut tokens: Vec<String> = normalized.split(' ').map(str::to_string).collect();
    if tokens.len() > 1 {
        tokens.push(normalized.clone());
    }

    NormalizedQuery { normalized, tokens }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn strips_punctuation_and_collapses_spaces() {
        let q = normalize("  hello,   world!! ");
        assert_eq!(q.normalized, "hello world");
    }

    #[test]
    fn keeps_unicode_letters_numbers_and_symbols() {
        let q = normalize("Écoute: 42€ — naïve+");
        assert_eq!(q.normalized, "Écoute 42€ naïve+");
    }

    #[test]
    fn single_word_has_no_phrase_token() {
        let q = normalize("quick");
        assert_eq!(q.tokens, vec!["quick"]);
    }

    #[test]
    fn multi_word_appends_phrase_token() {
        let q = normalize("quick fox");
        assert_eq!(q.tokens, vec!["quick", "fox", "quick fox"]);
    }

    #[test]
    fn short_query_yields_no_tokens() {
        for raw in ["", "ab", " a. ", "!!!", "é?"] {
            let q = normalize(raw);
            assert!(q.is_empty(), "expected no tokens for {raw:?}");
        }
    }

    #[test]
    fn three_character_query_is_not_short() {
        let q = normalize("a.b");
        assert_eq!(q.normalized, "a b");
        assert_eq!(q.tokens, vec!["a", "b", "a b"]);
        let searchable: Vec<_> = q.searchable_tokens().collect();
        assert_eq!(searchable, vec!["a b"]);
    }

    #[test]
    fn length_is_counted_in_characters() {
        // Three characters, nine bytes.
        let q = normalize("日本語");
        assert_eq!(q.tokens, vec!["日本語"]);
        // Two characters, six bytes.
        assert!(normalize("日本").is_empty());
    }

    #[test]
    fn short_tokens_keep_their_position_but_are_not_searchable() {
        let q = normalize("la rue de Paris");
        assert_eq!(q.tokens, vec!["la", "rue", "de", "Paris", "la rue de Paris"]);
        let searchable: Vec<_> = q.searchable_tokens().collect();
        assert_eq!(searchable, vec!["rue", "Paris", "la rue de Paris"]);
    }

    #[test]
    fn apostrophes_split_words() {
        let q = normalize("l'histoire");
        assert_eq!(q.tokens, vec!["l", "histoire", "l histoire"]);
    }

    #[test]
    fn clean_is_trimmed() {
        assert_eq!(clean("\t\n--x--\n"), "x");
    }

    proptest! {
        /// Normalizing an already normalized query changes nothing.
        #[test]
        fn prop_normalize_is_idempotent(raw in "\\PC{0,40}") {
            let first = normalize(&raw);
            let second = normalize(&first.normalized);
            prop_assert_eq!(first, second);
        }

        /// Two searchable words always carry their phrase as a third token.
        #[test]
        fn prop_two_words_include_phrase(a in "[a-z]{3,8}", b in "[a-z]{3,8}") {
            let q = normalize(&format!("{a} {b}"));
            prop_assert_eq!(q.tokens, vec![a.clone(), b.clone(), format!("{a} {b}")]);
        }
    }
}
