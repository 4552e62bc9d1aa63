//! Sentence segmentation.

use super::patterns::{SENTENCE_END, WHITESPACE};

/// Minimum sentence length in characters.
pub const MIN_SENTENCE_CHARS: usize = 40;

/// Minimum sentence length in words.
pub const MIN_SENTENCE_WORDS: usize = 8;

/// Maximum sentence length in words.
pub const MAX_SENTENCE_WORDS: usize = 50;

/// A sentence retained by the segmenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Trimmed sentence text, terminator removed
    pub text: String,

    /// Ordinal among retained sentences on the page
    pub position: usize,
}

/// Split raw page text into sentences.
///
/// The returned iterator is lazy; clone it to walk the page again.
pub fn sentences(text: &str) -> Sentences {
    Sentences {
        text: WHITESPACE.replace_all(text, " ").into_owned(),
        cursor: Some(0),
        retained: 0,
    }
}

/// Lazy iterator over the retained sentences of one page.
#[derive(Debug, Clone)]
pub struct Sentences {
    text: String,
    cursor: Option<usize>,
    retained: usize,
}

impl Sentences {
    fn next_fragment(&mut self) -> Option<&str> {
        let start = self.cursor?;
        let (end, next) = match SENTENCE_END.find_at(&self.text, start) {
            Some(m) => (m.start(), Some(m.end())),
            None => (self.text.len(), None),
        };
        self.cursor = next;
        Some(self.text[start..end].trim_matches(' '))
    }
}

impl Iterator for Sentences {
    type Item = Sentence;

    fn next(&mut self) -> Option<Sentence> {
        loop {
            let fragment = self.next_fragment()?;
            if is_eligible(fragment) {
                let sentence = Sentence {
                    text: fragment.to_string(),
                    position: self.retained,
                };
                self.retained += 1;
                return Some(sentence);
            }
        }
    }
}

/// Length filter applied to every fragment.
///
/// Fragments have had whitespace collapsed, so splitting on a single space
/// counts words.
fn is_eligible(fragment: &str) -> bool {
    if fragment.chars().count() < MIN_SENTENCE_CHARS {
        return false;
    }
    let words = fragment.split(' ').count();
    (MIN_SENTENCE_WORDS..=MAX_SENTENCE_WORDS).contains(&words)
}
