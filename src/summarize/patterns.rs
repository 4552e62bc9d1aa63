//! Compiled token patterns shared by scoring and emphasis.
//!
//! Digit classes are ASCII-only and the whitespace class is Unicode
//! whitespace plus U+FEFF minus U+0085, so match boundaries are identical
//! to the heuristics these rules were tuned against.

use std::sync::LazyLock;

use regex::Regex;

macro_rules! ws {
    () => {
        r"[[\s\x{FEFF}]--[\x{85}]]"
    };
}

/// Runs of whitespace, collapsed to a single space before splitting.
pub(crate) static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(concat!(ws!(), "+")).expect("whitespace pattern"));

/// Sentence terminators.
pub(crate) static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern"));

/// Integers/decimals with optional percent, or dollar amounts.
pub(crate) static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+(?:[.,][0-9]+)?%?|\$[0-9,]+").expect("numeric pattern")
});

/// Statistical significance, matched against lowercased text.
pub(crate) static SIGNIFICANCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "p",
        ws!(),
        r"*[<>=]",
        ws!(),
        r"*0?\.[0-9]+|significant"
    ))
    .expect("significance pattern")
});

/// P-value tokens for emphasis, either case of `p`.
pub(crate) static P_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "[pP]",
        ws!(),
        r"*[<>=]",
        ws!(),
        r"*0?\.[0-9]+"
    ))
    .expect("p-value pattern")
});

/// Maximal ASCII word runs; proper nouns are the runs shaped `[A-Z][a-z]+`.
pub(crate) static ASCII_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("word pattern"));

/// Count proper-noun-like tokens: capitalized ASCII words delimited by
/// ASCII word boundaries.
pub(crate) fn count_proper_nouns(text: &str) -> usize {
    ASCII_WORD
        .find_iter(text)
        .filter(|m| is_capitalized_word(m.as_str()))
        .count()
}

fn is_capitalized_word(word: &str) -> bool {
    match word.as_bytes().split_first() {
        Some((first, rest)) if first.is_ascii_uppercase() => {
            !rest.is_empty() && rest.iter().all(u8::is_ascii_lowercase)
        }
        _ => false,
    }
}
