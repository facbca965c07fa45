//! Compressed sparse row operator for boundary contributions.

use super::common::store;
use super::common::ApplyOp;

/// Accumulates unordered (row, col, val) triplets.
///
/// Duplicate (row, col) pairs are summed when the builder is finalized.
/// Finalization consumes the builder; a finalized [`Csr`] is immutable.
#[derive(Debug, Default)]
pub struct CsrBuilder {
    points: Vec<(i64, i64, f64)>,
}

impl CsrBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, row: i64, col: i64, val: f64) {
        debug_assert!(row >= 0 && col >= 0);
        self.points.push((row, col, val));
    }

    /// Sort, deduplicate, and freeze into a [`Csr`] with `nrows` total rows.
    pub fn to_csr(mut self, nrows: i64) -> Csr {
        self.points.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        let mut merged: Vec<(i64, i64, f64)> = Vec::with_capacity(self.points.len());
        for (row, col, val) in self.points {
            assert!(row < nrows, "csr row {} exceeds row count {}", row, nrows);
            match merged.last_mut() {
                Some((r, c, v)) if *r == row && *c == col => *v += val,
                _ => merged.push((row, col, val)),
            }
        }

        let mut row_ptr = vec![0usize; nrows as usize + 1];
        for &(row, _, _) in &merged {
            row_ptr[row as usize + 1] += 1;
        }
        for r in 1..row_ptr.len() {
            row_ptr[r] += row_ptr[r - 1];
        }

        Csr {
            row_ptr,
            cols: merged.iter().map(|&(_, c, _)| c).collect(),
            vals: merged.iter().map(|&(_, _, v)| v).collect(),
        }
    }
}

/// Sorted, deduplicated sparse matrix.
///
/// Apply always accumulates: `y[row] += sum A[row, col] * x[col]`. Callers
/// are responsible for zeroing the output first when overwrite semantics
/// are wanted.
#[derive(Clone, Debug, Default)]
pub struct Csr {
    row_ptr: Vec<usize>,
    cols: Vec<i64>,
    vals: Vec<f64>,
}

impl Csr {
    pub fn rows(&self) -> i64 {
        self.row_ptr.len() as i64 - 1
    }

    pub fn nnz(&self) -> usize {
        self.vals.len()
    }

    pub fn apply(&self, x: &[f64], y: &mut [f64]) {
        for row in 0..self.rows() as usize {
            let begin = self.row_ptr[row];
            let end = self.row_ptr[row + 1];
            if begin == end {
                continue;
            }
            let mut acc = 0.0;
            for e in begin..end {
                acc += self.vals[e] * x[self.cols[e] as usize];
            }
            store(y, row as i64, acc, ApplyOp::Accumulate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_accumulation() {
        let mut b = CsrBuilder::new();
        b.add_point(1, 0, 2.0);
        b.add_point(1, 0, 3.0);
        b.add_point(0, 1, 1.0);
        let m = b.to_csr(3);
        assert_eq!(m.nnz(), 2);

        let x = vec![1.0, 10.0];
        let mut y = vec![0.0; 3];
        m.apply(&x, &mut y);
        assert_eq!(y, vec![10.0, 5.0, 0.0]);
    }

    #[test]
    fn test_apply_accumulates() {
        let mut b = CsrBuilder::new();
        b.add_point(0, 0, 1.0);
        let m = b.to_csr(1);
        let mut y = vec![5.0];
        m.apply(&[2.0], &mut y);
        assert_eq!(y, vec![7.0]);
    }

    #[test]
    fn test_unsorted_insertion() {
        let mut b = CsrBuilder::new();
        b.add_point(2, 3, 1.0);
        b.add_point(0, 1, 1.0);
        b.add_point(2, 1, 4.0);
        let m = b.to_csr(4);
        assert_eq!(m.nnz(), 3);

        let x = vec![0.0, 2.0, 0.0, 10.0];
        let mut y = vec![0.0; 4];
        m.apply(&x, &mut y);
        assert_eq!(y, vec![2.0, 0.0, 18.0, 0.0]);
    }

    #[test]
    fn test_empty_rows_contribute_nothing() {
        let b = CsrBuilder::new();
        let m = b.to_csr(2);
        let mut y = vec![1.0, 2.0];
        m.apply(&[], &mut y);
        assert_eq!(y, vec![1.0, 2.0]);
    }
}
