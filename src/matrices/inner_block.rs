//! Composite line operator: boundary rows + interior stencil.

use super::circulant::Circulant;
use super::common::{ApplyOp, Layout};
use super::dense::Dense;

/// The operator for a single line: a left boundary block, a run of interior
/// stencil rows, and a right boundary block, covering disjoint row ranges.
///
/// Rows total `left.rows + interior.rows + right.rows`; columns may exceed
/// rows when boundary rows were deleted (Dirichlet row-dropping). Child
/// offsets are derived here so the three applies never overlap:
///
/// - left keeps the block's `(row_offset, col_offset, stride)`
/// - interior starts `left.rows` rows further down (its columns are
///   implicit, centered on its own rows)
/// - right starts after the interior and its columns are right-aligned to
///   the block's last column
#[derive(Clone, Debug)]
pub struct InnerBlock {
    layout: Layout,
    left: Dense,
    interior: Circulant,
    right: Dense,
}

impl InnerBlock {
    pub fn new(
        columns: i64,
        row_offset: i64,
        col_offset: i64,
        stride: i64,
        mut left: Dense,
        mut interior: Circulant,
        mut right: Dense,
    ) -> Self {
        let rows = left.rows() + interior.rows() + right.rows();

        left.set_offsets(row_offset, col_offset, stride);
        interior.set_offsets(row_offset + stride * left.rows(), stride);
        right.set_offsets(
            row_offset + stride * (left.rows() + interior.rows()),
            col_offset + stride * (columns - right.columns()),
            stride,
        );

        Self {
            layout: Layout::with_offsets(rows, columns, row_offset, col_offset, stride),
            left,
            interior,
            right,
        }
    }

    #[inline]
    pub fn rows(&self) -> i64 {
        self.layout.rows
    }

    #[inline]
    pub fn columns(&self) -> i64 {
        self.layout.cols
    }

    pub fn apply(&self, x: &[f64], b: &mut [f64], op: ApplyOp) {
        self.left.apply(x, b, op);
        self.interior.apply(x, b, op);
        self.right.apply(x, b, op);
    }
}
