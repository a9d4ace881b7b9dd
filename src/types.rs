//! Node sets and fragment subsets.
//!
//! A [`NodeSet`] is an ordered list of distinct node indices, used for the bulk
//! target and the fragment list. A [`Subset`] is one non-empty selection of
//! fragments, kept in fragment-list order.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Inline capacity covers every subset of the fragment counts used in practice.
type Members = SmallVec<[usize; 8]>;

/// An ordered sequence of distinct node indices.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeSet(Vec<usize>);

impl NodeSet {
    /// Creates a node set without validation.
    pub fn new(nodes: Vec<usize>) -> Self {
        NodeSet(nodes)
    }

    /// Creates a node set containing one node.
    pub fn single(node: usize) -> Self {
        NodeSet(vec![node])
    }

    /// Checks that every node is in `0..n` and appears only once.
    pub fn validate(&self, n: usize) -> Result<()> {
        let mut seen = vec![false; n];
        for &node in &self.0 {
            if node >= n {
                return Err(Error::NodeOutOfRange { node, n });
            }
            if seen[node] {
                return Err(Error::DuplicateNode { node });
            }
            seen[node] = true;
        }
        Ok(())
    }

    /// Returns a copy with the nodes in ascending order.
    pub fn sorted(&self) -> Self {
        let mut nodes = self.0.clone();
        nodes.sort_unstable();
        NodeSet(nodes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<usize>> for NodeSet {
    fn from(nodes: Vec<usize>) -> Self {
        NodeSet(nodes)
    }
}

impl AsRef<[usize]> for NodeSet {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

/// A non-empty subset of the fragment list.
///
/// Members keep the relative order they have in the fragment list, so all
/// subsets drawn from one list compare equal exactly when their member sets are
/// equal. The subset also carries its bit mask over fragment *positions*, which
/// makes containment tests a single AND.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Subset {
    members: Members,
    mask: u64,
}

impl Subset {
    /// Builds the subset selecting `positions` (ascending) out of `fragments`.
    ///
    /// Positions must be below 64, the width of the mask.
    pub fn from_positions(fragments: &[usize], positions: &[usize]) -> Self {
        let mut members = Members::with_capacity(positions.len());
        let mut mask = 0u64;
        for &p in positions {
            members.push(fragments[p]);
            mask |= 1 << p;
        }
        Self { members, mask }
    }

    /// Number of fragments in the subset (its order).
    pub fn len(&self) -> usize {
        self.members.len()
    }
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Bit mask over positions in the fragment list this subset was drawn from.
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Returns true if every member of `self` is also a member of `other`.
    ///
    /// Both subsets must come from the same fragment list.
    #[inline]
    pub fn is_subset_of(&self, other: &Subset) -> bool {
        self.mask & !other.mask == 0
    }

    /// Returns the members in ascending node order.
    pub fn sorted_members(&self) -> Vec<usize> {
        let mut v = self.members.to_vec();
        v.sort_unstable();
        v
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, m) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", m)?;
        }
        write!(f, "}}")
    }
}
