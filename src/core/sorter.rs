//! Stable merge sort of signatures that tracks where each one came from.

use crate::domain::model::Signature;

/// Signatures in ascending order together with their original positions:
/// `signatures()[k]` was at position `permutation()[k]` before sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedSignatures {
    signatures: Vec<Signature>,
    permutation: Vec<usize>,
}

impl SortedSignatures {
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IndexedSorter;

impl IndexedSorter {
    pub fn new() -> Self {
        Self
    }

    /// Sorts ascending. Equal signatures keep their original relative order.
    pub fn sort(&self, signatures: Vec<Signature>) -> SortedSignatures {
        let n = signatures.len();
        let mut buffers = MergeBuffers {
            values: signatures,
            positions: (0..n).collect(),
            values_tmp: vec![Signature::default(); n],
            positions_tmp: vec![0; n],
        };

        if n > 1 {
            buffers.merge_sort(0, n - 1);
        }

        SortedSignatures {
            signatures: buffers.values,
            permutation: buffers.positions,
        }
    }
}

/// Two co-indexed arrays and their scratch space, all of length n for the
/// whole sort.
struct MergeBuffers {
    values: Vec<Signature>,
    positions: Vec<usize>,
    values_tmp: Vec<Signature>,
    positions_tmp: Vec<usize>,
}

impl MergeBuffers {
    fn merge_sort(&mut self, left: usize, right: usize) {
        if left < right {
            let center = left + (right - left) / 2;
            self.merge_sort(left, center);
            self.merge_sort(center + 1, right);
            self.merge(left, center + 1, right);
        }
    }

    /// Merges the sorted runs `[left, right_start)` and `[right_start, right_end]`.
    fn merge(&mut self, left: usize, right_start: usize, right_end: usize) {
        let left_end = right_start - 1;
        let mut l = left;
        let mut r = right_start;
        let mut k = left;

        while l <= left_end && r <= right_end {
            // ties go left, which is what keeps the sort stable
            if self.values[l] <= self.values[r] {
                self.take(l, k);
                l += 1;
            } else {
                self.take(r, k);
                r += 1;
            }
            k += 1;
        }

        while l <= left_end {
            self.take(l, k);
            l += 1;
            k += 1;
        }

        while r <= right_end {
            self.take(r, k);
            r += 1;
            k += 1;
        }

        for i in left..=right_end {
            self.values[i] = std::mem::take(&mut self.values_tmp[i]);
            self.positions[i] = self.positions_tmp[i];
        }
    }

    /// Moves element `from` into scratch slot `to`, value and position together.
    fn take(&mut self, from: usize, to: usize) {
        self.values_tmp[to] = std::mem::take(&mut self.values[from]);
        self.positions_tmp[to] = self.positions[from];
    }
}
