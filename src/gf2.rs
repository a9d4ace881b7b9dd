//! Dense binary matrices and exact rank over GF(2).
//!
//! Rows are packed into [`BitSet`]s, so row addition is a word-wise XOR and
//! elimination never touches floating point.

use std::fmt;

use log::debug;

use crate::bitset::{Bit, BitSet};

/// A dense `rows x cols` matrix over GF(2).
#[derive(Clone, Eq, PartialEq)]
pub struct Gf2Matrix {
    rows: Vec<BitSet>,
    cols: usize,
}

impl Gf2Matrix {
    /// Creates the all-zero `rows x cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![BitSet::new(cols); rows],
            cols,
        }
    }

    /// Creates the `k x k` identity matrix.
    pub fn identity(k: usize) -> Self {
        let mut m = Self::zeros(k, k);
        for i in 0..k {
            m.set(i, i, true);
        }
        m
    }

    /// Builds a matrix from integer or boolean rows; every entry is reduced mod 2.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    pub fn from_rows<R, T>(rows: &[R]) -> Self
    where
        R: AsRef<[T]>,
        T: Bit,
    {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let packed = rows
            .iter()
            .map(|r| {
                let r = r.as_ref();
                assert_eq!(r.len(), cols, "ragged matrix rows");
                BitSet::from_bits(r)
            })
            .collect();
        Self { rows: packed, cols }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows[row].get(col)
    }
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        self.rows[row].set(col, value);
    }

    pub fn row(&self, row: usize) -> &BitSet {
        &self.rows[row]
    }

    /// Returns the transposed `cols x rows` matrix.
    pub fn transpose(&self) -> Self {
        let mut t = Self::zeros(self.cols, self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            for j in row.iter() {
                t.set(j, i, true);
            }
        }
        t
    }

    /// Rank over GF(2). See [`rank_gf2`].
    pub fn rank(&self) -> usize {
        rank_gf2(self)
    }
}

impl fmt::Debug for Gf2Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gf2Matrix {}x{} [", self.rows.len(), self.cols)?;
        for row in &self.rows {
            write!(f, "  ")?;
            for j in 0..self.cols {
                write!(f, "{}", row.get(j) as u8)?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}

/// Computes the rank of a binary matrix over GF(2).
///
/// Gauss-Jordan elimination with XOR as row addition. For each column, the
/// first row at or below the pivot row with a 1 there is swapped into place
/// and then XORed into every *other* row having a 1 in that column. Columns
/// without a candidate pivot are skipped. Stops as soon as every row holds a
/// pivot.
///
/// The result lies in `0..=min(rows, cols)`.
pub fn rank_gf2(matrix: &Gf2Matrix) -> usize {
    let mut m = matrix.rows.clone();
    let num_rows = m.len();
    let mut rank = 0;

    if num_rows == 0 {
        return 0;
    }

    for col in 0..matrix.cols {
        let Some(pivot) = (rank..num_rows).find(|&r| m[r].get(col)) else {
            continue;
        };
        m.swap(rank, pivot);

        let (head, after) = m.split_at_mut(rank + 1);
        let (before, pivot_row) = head.split_at_mut(rank);
        let pivot_row = &pivot_row[0];
        for row in before.iter_mut().chain(after.iter_mut()) {
            if row.get(col) {
                row.xor_assign(pivot_row);
            }
        }

        rank += 1;
        if rank == num_rows {
            break;
        }
    }

    debug!("rank_gf2({}x{}) = {}", num_rows, matrix.cols, rank);
    rank
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    fn binary_matrix() -> impl Strategy<Value = Vec<Vec<u8>>> {
        (0usize..9, 0usize..9).prop_flat_map(|(r, c)| {
            proptest::collection::vec(proptest::collection::vec(0u8..2, c), r)
        })
    }

    proptest! {
        #[test]
        fn prop_rank_transpose_invariant(rows in binary_matrix()) {
            let m = Gf2Matrix::from_rows(&rows);
            prop_assert_eq!(m.rank(), m.transpose().rank());
        }

        #[test]
        fn prop_rank_bounded(rows in binary_matrix()) {
            let m = Gf2Matrix::from_rows(&rows);
            prop_assert!(m.rank() <= m.num_rows().min(m.num_cols()));
        }
    }
}
