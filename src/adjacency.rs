//! Graph-state adjacency matrices.
//!
//! The matrix is produced by an external graph-state builder. This module only
//! checks its shape, stores it packed, and extracts the off-diagonal blocks
//! the entropy formula needs.

use crate::bitset::{Bit, BitSet};
use crate::error::{Error, Result};
use crate::gf2::Gf2Matrix;

/// An `n x n` binary adjacency matrix of a graph state.
///
/// Symmetry and a zero diagonal are a caller contract and are not checked;
/// see [`AdjacencyMatrix::is_symmetric`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AdjacencyMatrix {
    matrix: Gf2Matrix,
}

impl AdjacencyMatrix {
    /// Builds the matrix from integer or boolean rows (entries reduced mod 2).
    ///
    /// Fails with [`Error::NotSquare`] if any row does not have exactly as many
    /// entries as there are rows.
    pub fn from_rows<R, T>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: Bit,
    {
        let n = rows.len();
        for (row, r) in rows.iter().enumerate() {
            let cols = r.as_ref().len();
            if cols != n {
                return Err(Error::NotSquare { rows: n, row, cols });
            }
        }
        Ok(Self {
            matrix: Gf2Matrix::from_rows(rows),
        })
    }

    /// Builds the graph on `n` nodes with the given undirected edges.
    ///
    /// Self-loops are ignored; repeated edges are idempotent.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut matrix = Gf2Matrix::zeros(n, n);
        for &(u, v) in edges {
            for node in [u, v] {
                if node >= n {
                    return Err(Error::NodeOutOfRange { node, n });
                }
            }
            if u != v {
                matrix.set(u, v, true);
                matrix.set(v, u, true);
            }
        }
        Ok(Self { matrix })
    }

    /// The cycle graph `0-1-...-(n-1)-0`.
    pub fn cycle(n: usize) -> Self {
        let mut matrix = Gf2Matrix::zeros(n, n);
        if n >= 2 {
            for i in 0..n {
                let j = (i + 1) % n;
                if i != j {
                    matrix.set(i, j, true);
                    matrix.set(j, i, true);
                }
            }
        }
        Self { matrix }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.matrix.num_rows()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.matrix.get(u, v)
    }

    /// Returns true if the matrix is symmetric with a zero diagonal.
    pub fn is_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| {
            !self.matrix.get(i, i)
                && (i + 1..n).all(|j| self.matrix.get(i, j) == self.matrix.get(j, i))
        })
    }

    /// Sorted neighbourhood of `node`.
    pub fn neighbors(&self, node: usize) -> Vec<usize> {
        self.matrix.row(node).iter().collect()
    }

    /// The block with rows `rows` and columns `cols`, in the given orders.
    pub fn submatrix(&self, rows: &[usize], cols: &[usize]) -> Gf2Matrix {
        let mut sub = Gf2Matrix::zeros(rows.len(), cols.len());
        for (i, &r) in rows.iter().enumerate() {
            let row: &BitSet = self.matrix.row(r);
            for (j, &c) in cols.iter().enumerate() {
                if row.get(c) {
                    sub.set(i, j, true);
                }
            }
        }
        sub
    }

    pub fn as_matrix(&self) -> &Gf2Matrix {
        &self.matrix
    }
}
