use crate::core::extractor::GroupExtractor;
use crate::core::signature::SignatureBuilder;
use crate::core::sorter::IndexedSorter;
use crate::domain::model::{Group, WordSet};

/// Groups anagrams: signature per word, stable sort, one scan for runs.
///
/// Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnagramEngine {
    builder: SignatureBuilder,
    sorter: IndexedSorter,
    extractor: GroupExtractor,
}

impl AnagramEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups of two or more anagrams, in ascending signature order.
    pub fn run(&self, words: &WordSet) -> Vec<Group> {
        let words = words.to_vec();
        self.group_words(&words)
    }

    /// Same as [`run`](Self::run) over words already in a fixed order. Within
    /// a group, words keep the order they have in `words`.
    pub fn group_words<S: AsRef<str>>(&self, words: &[S]) -> Vec<Group> {
        let signatures = self.builder.build_all(words);
        let sorted = self.sorter.sort(signatures);
        let groups = self
            .extractor
            .extract(sorted.signatures(), sorted.permutation(), words);

        tracing::trace!(words = words.len(), groups = groups.len(), "grouped anagrams");
        groups
    }
}
