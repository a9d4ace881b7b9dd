//! Möbius inversion over the subset lattice.
//!
//! Given cumulative values `I(S)` for every non-empty subset `S`, recover the
//! irreducible contributions `f(S)` satisfying
//!
//! ```text
//! I(S) = Σ_{T ⊆ S} f(T)
//! ```
//!
//! Inversion is incremental: subsets are visited in canonical order (by size,
//! then lexicographically), and each `f(S)` is `I(S)` minus every `f(T)` already
//! assigned to a subset `T` of `S`. Since smaller subsets come first, every
//! proper subset has been resolved by the time `S` is reached.
//!
//! Positive `f(S)` means synergy: the fragments in `S` jointly carry
//! information about the bulk that no proper sub-collection carries.
//! Negative `f(S)` means redundancy.
//!
//! Floating-point subtraction does not associate, so the visiting order of the
//! subtracted terms is fixed to the canonical table order. Two runs over the
//! same table give bit-identical results.

use log::debug;

use crate::table::{FValueTable, MutualInformationTable, SubsetTable};

/// Recovers the irreducible f-value of every subset from its mutual information.
///
/// Single-fragment subsets keep their mutual information unchanged. The cost
/// is quadratic in the number of table entries, i.e. O(4^m) containment tests
/// for m fragments.
pub fn invert(mi: &MutualInformationTable) -> FValueTable {
    let entries = mi.entries();
    let mut f: Vec<f64> = Vec::with_capacity(entries.len());

    for (i, entry) in entries.iter().enumerate() {
        let mut total = entry.value;
        for (smaller, &value) in entries[..i].iter().zip(&f) {
            if smaller.subset.is_subset_of(&entry.subset) {
                total -= value;
            }
        }
        debug!("f({}) = {}", entry.subset, total);
        f.push(total);
    }

    mi.with_values(f)
}

/// Forward transform: `Σ_{T ⊆ S} f(T)` for every subset `S`.
///
/// Inverse of [`invert`] up to rounding.
pub fn reconstruct(f_values: &FValueTable) -> SubsetTable {
    let entries = f_values.entries();
    let sums = entries
        .iter()
        .map(|entry| {
            entries
                .iter()
                .filter(|t| t.subset.is_subset_of(&entry.subset))
                .map(|t| t.value)
                .sum()
        })
        .collect();
    f_values.with_values(sums)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::adjacency::AdjacencyMatrix;
    use crate::table::mutual_information_table;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_order_one_identity() {
        let mi = SubsetTable::from_fn(&[1, 2, 3, 4], |s| s.members().iter().sum::<usize>() as f64 * 0.25);
        let f = invert(&mi);
        for (a, b) in mi.iter().zip(f.iter()).filter(|(a, _)| a.subset.len() == 1) {
            assert_eq!(a.value, b.value);
        }
    }

    #[test]
    fn test_redundant_pair() {
        // Perfectly redundant fragments: the joint term is negative.
        let mi = SubsetTable::from_fn(&[10, 20], |_| 0.5);
        let f = invert(&mi);
        assert_eq!(f.get(&[10]), Some(0.5));
        assert_eq!(f.get(&[20]), Some(0.5));
        assert_eq!(f.get(&[10, 20]), Some(-0.5));
    }

    #[test]
    fn test_synergistic_pair() {
        // Neither fragment alone informs the bulk; together they do.
        let mi = SubsetTable::from_fn(&[1, 2], |s| if s.len() == 2 { 1.0 } else { 0.0 });
        let f = invert(&mi);
        assert_eq!(f.get(&[1]), Some(0.0));
        assert_eq!(f.get(&[2]), Some(0.0));
        assert_eq!(f.get(&[1, 2]), Some(1.0));
    }

    #[test]
    fn test_cycle_inversion() {
        let adj = AdjacencyMatrix::cycle(4);
        let mi = mutual_information_table(&adj, &[0], &[1, 2, 3]);
        let f = invert(&mi);

        let values: Vec<f64> = f.iter().map(|e| e.value).collect();
        // {1} {2} {3} {1,2} {1,3} {2,3} {1,2,3}
        assert_eq!(values, vec![0.0, 1.0, 0.0, 1.0, 1.0, 1.0, -2.0]);

        let total: f64 = f.iter().map(|e| e.value).sum();
        assert!((total - mi.total().unwrap()).abs() < EPS);
    }

    #[test]
    fn test_round_trip() {
        let mi = SubsetTable::from_fn(&[3, 1, 4, 5, 9], |s| {
            let m = s.mask() as f64;
            (m * 0.37).sin().abs() * s.len() as f64
        });
        let back = reconstruct(&invert(&mi));
        for (a, b) in mi.iter().zip(back.iter()) {
            assert_eq!(a.subset, b.subset);
            assert!((a.value - b.value).abs() < EPS, "{}: {} vs {}", a.subset, a.value, b.value);
        }
    }

    #[test]
    fn test_deterministic() {
        let mi = SubsetTable::from_fn(&[0, 1, 2, 3, 4, 5], |s| 0.1 * s.mask() as f64);
        let f1 = invert(&mi);
        let f2 = invert(&mi);
        for (a, b) in f1.iter().zip(f2.iter()) {
            assert_eq!(a.value.to_bits(), b.value.to_bits());
        }
    }

    #[test]
    fn test_empty_table() {
        let mi = SubsetTable::from_fn(&[], |_| 1.0);
        let f = invert(&mi);
        assert!(f.is_empty());
        assert!(reconstruct(&f).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn prop_round_trip(values in proptest::collection::vec(-4.0f64..4.0, 63)) {
            let fragments: Vec<usize> = (0..6).collect();
            let mut it = values.into_iter();
            let mi = SubsetTable::from_fn(&fragments, |_| it.next().unwrap_or(0.0));
            let back = reconstruct(&invert(&mi));
            for (a, b) in mi.iter().zip(back.iter()) {
                prop_assert!((a.value - b.value).abs() < 1e-6);
            }
        }
    }
}
