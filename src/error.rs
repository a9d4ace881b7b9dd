//! Error types.
//!
//! Every error is a precondition violation detected before any rank is
//! computed. Nothing is retried or recovered internally.

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A row of the adjacency matrix does not have `rows` entries.
    #[error("Adjacency matrix is not square: {rows} rows, but row {row} has {cols} entries")]
    NotSquare { rows: usize, row: usize, cols: usize },

    /// A node index is outside `0..n`.
    #[error("Node {node} is out of range for a graph on {n} nodes")]
    NodeOutOfRange { node: usize, n: usize },

    /// A node appears twice in a node set.
    #[error("Node {node} appears more than once")]
    DuplicateNode { node: usize },

    /// The fragment list exceeds the configured bound on subset enumeration.
    #[error("Too many fragments: {count} (at most {max} supported, the table has 2^m - 1 entries)")]
    TooManyFragments { count: usize, max: usize },
}

impl Error {
    /// Returns true for errors caused by a malformed adjacency matrix or node set.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Error::NotSquare { .. } | Error::NodeOutOfRange { .. } | Error::DuplicateNode { .. }
        )
    }
}
