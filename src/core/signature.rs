//! Canonical anagram signatures.

use crate::domain::model::Signature;

/// Above this many characters the quadratic insertion gives way to a slice sort.
const INSERTION_SORT_LIMIT: usize = 32;

/// Builds the signature of `word`: its characters in ascending code-point order.
pub fn signature(word: &str) -> Signature {
    let mut sorted: Vec<char> = Vec::with_capacity(word.len());

    if word.chars().nth(INSERTION_SORT_LIMIT).is_some() {
        sorted.extend(word.chars());
        sorted.sort_unstable();
        return Signature::from_sorted(sorted);
    }

    for c in word.chars() {
        // insert after any equal characters already placed
        let at = sorted
            .iter()
            .position(|&placed| c < placed)
            .unwrap_or(sorted.len());
        sorted.insert(at, c);
    }
    Signature::from_sorted(sorted)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureBuilder;

impl SignatureBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, word: &str) -> Signature {
        signature(word)
    }

    /// One signature per word, same positions.
    pub fn build_all<S: AsRef<str>>(&self, words: &[S]) -> Vec<Signature> {
        words.iter().map(|w| signature(w.as_ref())).collect()
    }
}
