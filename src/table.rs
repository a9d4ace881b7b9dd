//! Subset-keyed value tables.
//!
//! A [`SubsetTable`] holds one value per non-empty subset of a fragment list,
//! stored in canonical order (see [`crate::subsets`]). The same shape is used
//! for mutual information and for Möbius f-values.

use log::debug;
use serde::{Deserialize, Serialize, Serializer};

use crate::adjacency::AdjacencyMatrix;
use crate::entropy::mutual_information;
use crate::subsets::{num_subsets, subsets_by_size};
use crate::types::Subset;

/// One `(subset, value)` entry of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub subset: Subset,
    pub value: f64,
}

/// Serialized form of an entry: members in ascending node order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsetValue {
    pub subset: Vec<usize>,
    pub value: f64,
}

/// Values indexed by the non-empty subsets of a fragment list.
///
/// Entries are in canonical order: by size, then lexicographically by fragment
/// position. Entry `i` is keyed by a subset whose position mask is unique, so
/// lookups go through a mask index.
#[derive(Debug, Clone, PartialEq)]
pub struct SubsetTable {
    fragments: Vec<usize>,
    entries: Vec<Entry>,
    /// `index[mask]` is the position of the entry with that mask (`index[0]` unused).
    index: Vec<usize>,
}

/// Largest fragment list a table can be built for.
///
/// A table over m fragments holds 2^m - 1 entries; at this bound one table
/// already takes a few hundred megabytes.
pub const MAX_TABLE_FRAGMENTS: usize = 22;

/// `I(bulk : S)` for every non-empty fragment subset `S`.
pub type MutualInformationTable = SubsetTable;

/// Irreducible information per subset, produced by Möbius inversion.
pub type FValueTable = SubsetTable;

impl SubsetTable {
    /// Builds a table by evaluating `f` on every subset, in canonical order.
    ///
    /// # Panics
    ///
    /// Panics if there are more than [`MAX_TABLE_FRAGMENTS`] fragments.
    pub fn from_fn(fragments: &[usize], mut f: impl FnMut(&Subset) -> f64) -> Self {
        let m = fragments.len();
        assert!(
            m <= MAX_TABLE_FRAGMENTS,
            "Too many fragments for a subset table: {} > {}",
            m,
            MAX_TABLE_FRAGMENTS
        );
        let mut entries = Vec::with_capacity(num_subsets(m));
        let mut index = vec![0; 1 << m];
        for subset in subsets_by_size(fragments) {
            let value = f(&subset);
            index[subset.mask() as usize] = entries.len();
            entries.push(Entry { subset, value });
        }
        Self {
            fragments: fragments.to_vec(),
            entries,
            index,
        }
    }

    /// A table over the same subsets with new values, given in canonical order.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != self.len()`.
    pub fn with_values(&self, values: Vec<f64>) -> Self {
        assert_eq!(values.len(), self.entries.len(), "one value per subset");
        let entries = self
            .entries
            .iter()
            .zip(values)
            .map(|(e, value)| Entry {
                subset: e.subset.clone(),
                value,
            })
            .collect();
        Self {
            fragments: self.fragments.clone(),
            entries,
            index: self.index.clone(),
        }
    }

    /// The fragment list the subsets are drawn from.
    pub fn fragments(&self) -> &[usize] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in canonical order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Value of the entry with position mask `mask`, if any.
    pub fn get_by_mask(&self, mask: u64) -> Option<f64> {
        if mask == 0 {
            return None;
        }
        self.index.get(mask as usize).map(|&i| self.entries[i].value)
    }

    /// Value for the subset with exactly these members (in any order).
    pub fn get(&self, members: &[usize]) -> Option<f64> {
        let mut mask = 0u64;
        for node in members {
            let p = self.fragments.iter().position(|f| f == node)?;
            mask |= 1 << p;
        }
        self.get_by_mask(mask)
    }

    /// Value for the full fragment set, or `None` for an empty table.
    pub fn total(&self) -> Option<f64> {
        self.entries.last().map(|e| e.value)
    }

    /// Largest subset size present (0 for an empty table).
    pub fn max_order(&self) -> usize {
        self.entries.last().map_or(0, |e| e.subset.len())
    }

    /// Records sorted by (size, ascending members), as written by serializers.
    pub fn to_records(&self) -> Vec<SubsetValue> {
        let mut records: Vec<SubsetValue> = self
            .entries
            .iter()
            .map(|e| SubsetValue {
                subset: e.subset.sorted_members(),
                value: e.value,
            })
            .collect();
        records.sort_by(|a, b| (a.subset.len(), &a.subset).cmp(&(b.subset.len(), &b.subset)));
        records
    }
}

/// Serializes as the list of [`SubsetValue`] records from [`SubsetTable::to_records`].
impl Serialize for SubsetTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_records())
    }
}

/// Builds the mutual-information table of `bulk` against every non-empty
/// subset of `fragments`.
///
/// Performs 2^m - 1 entropy triples for m fragments. Fragment counts above
/// roughly 20 are impractical; [`crate::analysis::Analyzer`] enforces a bound.
///
/// An empty fragment list gives an empty table.
///
/// # Panics
///
/// Panics if there are more than [`MAX_TABLE_FRAGMENTS`] fragments.
pub fn mutual_information_table(
    adjacency: &AdjacencyMatrix,
    bulk: &[usize],
    fragments: &[usize],
) -> MutualInformationTable {
    SubsetTable::from_fn(fragments, |subset| {
        let mi = mutual_information(adjacency, bulk, subset.members());
        debug!("I({:?} : {}) = {}", bulk, subset, mi);
        mi
    })
}
