//! # Text
//!
//! Counting over whitespace-delimited tokens. A token is a maximal run of
//! non-whitespace characters (Unicode `White_Space`), so punctuation stays part
//! of the word and matching is case-sensitive.
//!
//! ```rust
//! use kata_text::{count_words, word_count};
//!
//! let text = "the cat and the hat";
//! assert_eq!(count_words(text), 5);
//! assert_eq!(word_count(text, "the"), 2);
//! assert_eq!(word_count(text, "The"), 0);
//! ```

use fxhash::FxHashMap;
use tracing::trace;

/// Counts occurrences of `word` among the tokens of `text`.
///
/// An empty `word` counts every token instead. A `word` containing whitespace
/// can never equal a token and therefore counts zero.
#[must_use]
pub fn word_count(text: &str, word: &str) -> usize {
    let count = if word.is_empty() {
        text.split_whitespace().count()
    } else {
        text.split_whitespace().filter(|token| *token == word).count()
    };
    trace!(word, count, "Counted words");
    count
}

/// Total number of tokens in `text`.
#[must_use]
pub fn count_words(text: &str) -> usize {
    word_count(text, "")
}

/// Occurrences of every distinct token in `text`.
#[must_use]
pub fn word_frequencies(text: &str) -> FxHashMap<&str, usize> {
    let mut frequencies = FxHashMap::default();
    for token in text.split_whitespace() {
        *frequencies.entry(token).or_insert(0) += 1;
    }
    frequencies
}
