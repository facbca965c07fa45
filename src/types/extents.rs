//! Grid index extents and linearization.

use super::Int3;

/// Index extents of a structured 3D grid.
///
/// Defines the linearization used everywhere in the crate:
/// `ic(i, j, k) = i*ny*nz + j*nz + k` — x is the slowest axis, z the
/// fastest. Strides follow: `stride(0) = ny*nz`, `stride(1) = nz`,
/// `stride(2) = 1`.
///
/// # Example
///
/// ```
/// use cutcell::types::{IndexExtents, Int3};
///
/// let n = IndexExtents::new(4, 5, 6);
/// assert_eq!(n.size(), 120);
/// assert_eq!(n.ic(Int3::new(1, 2, 3)), 30 + 12 + 3);
/// assert_eq!(n.stride(0), 30);
/// assert_eq!(n.stride(2), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexExtents {
    pub extents: Int3,
}

impl IndexExtents {
    pub const fn new(nx: i64, ny: i64, nz: i64) -> Self {
        Self {
            extents: Int3::new(nx, ny, nz),
        }
    }

    pub const fn from_int3(extents: Int3) -> Self {
        Self { extents }
    }

    /// Linear index of a mesh coordinate.
    #[inline]
    pub fn ic(&self, ijk: Int3) -> i64 {
        let ny = self.extents[1];
        let nz = self.extents[2];
        debug_assert!(ijk[0] < self.extents[0] && ijk[1] < ny && ijk[2] < nz);
        ijk[0] * ny * nz + ijk[1] * nz + ijk[2]
    }

    /// Linear stride of one step along direction `dir`.
    #[inline]
    pub fn stride(&self, dir: usize) -> i64 {
        match dir {
            0 => self.extents[1] * self.extents[2],
            1 => self.extents[2],
            _ => 1,
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn size(&self) -> i64 {
        self.extents[0] * self.extents[1] * self.extents[2]
    }

    #[inline]
    pub fn get(&self, dir: usize) -> i64 {
        self.extents[dir]
    }
}

/// The two non-`dir` axes in canonical (slow, fast) order.
///
/// - dir 0 (x): slow = y, fast = z
/// - dir 1 (y): slow = x, fast = z
/// - dir 2 (z): slow = x, fast = y
#[inline]
pub const fn slow_fast(dir: usize) -> (usize, usize) {
    match dir {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    }
}
