use crate::domain::model::{Group, Signature};

#[derive(Debug, Clone, Copy, Default)]
pub struct GroupExtractor;

impl GroupExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Scans sorted signatures once and turns every run of two or more equal
    /// neighbours into a group, resolving words through `permutation`.
    ///
    /// `sorted[k]` must be the signature of `words[permutation[k]]`.
    pub fn extract<S: AsRef<str>>(
        &self,
        sorted: &[Signature],
        permutation: &[usize],
        words: &[S],
    ) -> Vec<Group> {
        debug_assert_eq!(sorted.len(), permutation.len());
        debug_assert_eq!(sorted.len(), words.len());

        let n = sorted.len();
        let word_at = |k: usize| words[permutation[k]].as_ref().to_string();
        let mut groups = Vec::new();
        let mut i = 0;

        while i + 1 < n {
            if sorted[i] == sorted[i + 1] {
                let start = i;
                let mut members = vec![word_at(i)];
                while i + 1 < n && sorted[i] == sorted[i + 1] {
                    i += 1;
                    members.push(word_at(i));
                }
                groups.push(Group::new(sorted[start].clone(), members));
            }
            // `i` is the last element of the run (or a singleton); move past it
            i += 1;
        }

        groups
    }
}
