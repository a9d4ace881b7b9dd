//! Canonical enumeration of fragment subsets.
//!
//! Subsets are produced size by size (1, 2, ..., m) and, within one size, in
//! lexicographic order of fragment *positions*. This order is part of the
//! output format: tables, inversion, and serialization all follow it.
//!
//! There are 2^m - 1 non-empty subsets of m fragments, so everything built on
//! this enumeration is exponential in m.

use crate::types::Subset;

/// Iterator over the `k`-element combinations of `0..n`, in lexicographic order.
///
/// Each item is an ascending list of positions.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        // Advance: find the rightmost index that can still move right.
        let k = self.indices.len();
        match (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(current)
    }
}

/// Number of non-empty subsets of `m` fragments.
pub fn num_subsets(m: usize) -> usize {
    (1usize << m) - 1
}

/// All non-empty subsets of `fragments`, in canonical order.
pub fn subsets_by_size(fragments: &[usize]) -> impl Iterator<Item = Subset> + '_ {
    let m = fragments.len();
    (1..=m).flat_map(move |k| {
        Combinations::new(m, k).map(move |positions| Subset::from_positions(fragments, &positions))
    })
}
