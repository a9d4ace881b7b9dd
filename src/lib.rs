//! # graph-synergy: Möbius decomposition of information in graph states
//!
//! **`graph-synergy`** measures how information about a designated *bulk* node
//! of a graph state is spread over subsets of a set of *fragment* nodes, and
//! how much of it is only visible through higher-order (synergistic)
//! correlations.
//!
//! ## How it works
//!
//! For a graph state with adjacency matrix Γ, the entropy of a subsystem A is
//! the GF(2) rank of the block Γ[A, Ā]. From this the crate computes:
//!
//! 1. **Mutual information** `I(bulk : S)` for every non-empty subset S of the
//!    fragments ([`table::mutual_information_table`]).
//! 2. **Irreducible contributions** `f(S)` by Möbius inversion over the subset
//!    lattice, so that `I(bulk : S) = Σ_{T ⊆ S} f(T)` ([`mobius::invert`]).
//! 3. **Per-order totals** `f_k` and the running **synergy ratio** of orders
//!    three and above ([`aggregate`]).
//!
//! All arithmetic on matrices is exact (mod 2). Every stage is a pure function
//! of the one below it.
//!
//! ## Complexity
//!
//! There are 2^m - 1 non-empty subsets of m fragments, and the inversion
//! compares every pair of them. The engine is exact but only practical for
//! small fragment sets; [`Analyzer`][crate::analysis::Analyzer] rejects more
//! than 20 fragments by default.
//!
//! ## Basic Usage
//!
//! ```rust
//! use graph_synergy::adjacency::AdjacencyMatrix;
//! use graph_synergy::analysis::Analyzer;
//! use graph_synergy::types::NodeSet;
//!
//! // Four-node ring: 0-1-2-3-0.
//! let adjacency = AdjacencyMatrix::cycle(4);
//!
//! let analysis = Analyzer::default()
//!     .analyze(&adjacency, &NodeSet::single(0), &[1, 2, 3], "ring")
//!     .unwrap();
//!
//! // The bulk node shares 2 bits with the rest of the ring.
//! assert_eq!(analysis.total_information, 2.0);
//!
//! // The f-values add back up to the total.
//! let sum: f64 = analysis.f_values.iter().map(|e| e.value).sum();
//! assert!((sum - analysis.total_information).abs() < 1e-9);
//! ```
//!
//! ## Core Components
//!
//! - **[`gf2`]**: binary matrices and rank over GF(2).
//! - **[`entropy`]**: subsystem entropy and mutual information.
//! - **[`table`]**: subset-keyed tables and the mutual-information table builder.
//! - **[`mobius`]**: inversion over the subset lattice.
//! - **[`aggregate`]**: `f_k` and the synergy ratio.
//! - **[`analysis`]**: validated end-to-end runs and serializable reports.

pub mod adjacency;
pub mod aggregate;
pub mod analysis;
pub mod bitset;
pub mod entropy;
pub mod error;
pub mod gf2;
pub mod mobius;
pub mod subsets;
pub mod table;
pub mod types;

pub use error::{Error, Result};
