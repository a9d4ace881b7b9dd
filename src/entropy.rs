//! Subsystem entropy and mutual information of graph states.
//!
//! For a graph state with adjacency matrix Γ, the entropy (in bits) of a
//! subsystem A is
//!
//! ```text
//! S(A) = rank_2(Γ[A, Ā])
//! ```
//!
//! where Γ[A, Ā] keeps the rows in A and the columns in the complement of A.

use log::debug;

use crate::adjacency::AdjacencyMatrix;

/// Entropy of `subset` in bits.
///
/// Zero for the empty subset and for the whole system (a pure global state).
/// Node indices must be in `0..n` and distinct.
pub fn entropy(adjacency: &AdjacencyMatrix, subset: &[usize]) -> usize {
    if subset.is_empty() {
        return 0;
    }
    let n = adjacency.len();
    let mut inside = vec![false; n];
    for &node in subset {
        inside[node] = true;
    }
    let complement: Vec<usize> = (0..n).filter(|&i| !inside[i]).collect();
    if complement.is_empty() {
        return 0;
    }
    let s = adjacency.submatrix(subset, &complement).rank();
    debug!("S({:?}) = {}", subset, s);
    s
}

/// Mutual information `I(a : b) = S(a) + S(b) - S(a ∪ b)` in bits.
///
/// Nodes shared by `a` and `b` count once in the union. The result is
/// non-negative for graph-state inputs; this is not checked.
pub fn mutual_information(adjacency: &AdjacencyMatrix, a: &[usize], b: &[usize]) -> f64 {
    let union = union(adjacency.len(), a, b);
    let s_a = entropy(adjacency, a);
    let s_b = entropy(adjacency, b);
    let s_ab = entropy(adjacency, &union);
    s_a as f64 + s_b as f64 - s_ab as f64
}

fn union(n: usize, a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut seen = vec![false; n];
    let mut out = Vec::with_capacity(a.len() + b.len());
    for &node in a.iter().chain(b) {
        if !seen[node] {
            seen[node] = true;
            out.push(node);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_empty_and_full() {
        let adj = AdjacencyMatrix::cycle(5);
        assert_eq!(entropy(&adj, &[]), 0);
        assert_eq!(entropy(&adj, &[0, 1, 2, 3, 4]), 0);
        assert_eq!(entropy(&adj, &[4, 2, 0, 3, 1]), 0);
    }

    #[test]
    fn test_single_node() {
        // Any node with at least one neighbour is maximally entangled.
        let adj = AdjacencyMatrix::cycle(4);
        for v in 0..4 {
            assert_eq!(entropy(&adj, &[v]), 1);
        }
        // An isolated node is in a product state.
        let adj = AdjacencyMatrix::from_edges(3, &[(0, 1)]).unwrap();
        assert_eq!(entropy(&adj, &[2]), 0);
    }

    #[test]
    fn test_complement_symmetry() {
        let adj = AdjacencyMatrix::cycle(6);
        let a = [0, 1, 4];
        let b = [2, 3, 5];
        assert_eq!(entropy(&adj, &a), entropy(&adj, &b));
    }

    #[test]
    fn test_cycle_pairs() {
        let adj = AdjacencyMatrix::cycle(4);
        // {0, 2} vs {1, 3}: both rows are [1, 1], rank 1.
        assert_eq!(entropy(&adj, &[0, 2]), 1);
        // {0, 1} vs {2, 3}: rows [0, 1] and [1, 0], rank 2.
        assert_eq!(entropy(&adj, &[0, 1]), 2);
    }

    #[test]
    fn test_mutual_information_cycle() {
        let adj = AdjacencyMatrix::cycle(4);
        assert_eq!(mutual_information(&adj, &[0], &[1]), 0.0);
        assert_eq!(mutual_information(&adj, &[0], &[2]), 1.0);
        assert_eq!(mutual_information(&adj, &[0], &[1, 3]), 1.0);
        assert_eq!(mutual_information(&adj, &[0], &[1, 2, 3]), 2.0);
    }

    #[test]
    fn test_mutual_information_overlap_counts_once() {
        let adj = AdjacencyMatrix::cycle(4);
        // I(A : A) = S(A) + S(A) - S(A) = S(A).
        assert_eq!(mutual_information(&adj, &[0, 1], &[0, 1]), 2.0);
        assert_eq!(mutual_information(&adj, &[0], &[0, 2]), 1.0);
    }

    #[test]
    fn test_bell_pair() {
        let adj = AdjacencyMatrix::from_edges(2, &[(0, 1)]).unwrap();
        assert_eq!(mutual_information(&adj, &[0], &[1]), 2.0);
    }
}
