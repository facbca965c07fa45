//! Uniform Cartesian grid.

use crate::error::MeshError;
use crate::types::{DomainBounds, IndexExtents, Int3, Real3};

/// A uniform 3D grid over a rectangular domain.
///
/// Cell centers sit at `min + ijk * h` with `h[d] = span[d] / (n[d] - 1)`,
/// so the first and last cells in each direction lie exactly on the domain
/// faces.
///
/// # Example
///
/// ```
/// use cutcell::mesh::Cartesian;
/// use cutcell::types::{DomainBounds, IndexExtents, Int3, Real3};
///
/// let bounds = DomainBounds::new(Real3::new(0.0, 0.0, 0.0), Real3::new(1.0, 1.0, 1.0)).unwrap();
/// let cart = Cartesian::new(IndexExtents::new(11, 11, 11), bounds).unwrap();
/// assert_eq!(cart.h(0), 0.1);
/// assert_eq!(cart.location(Int3::new(10, 0, 5)), Real3::new(1.0, 0.0, 0.5));
/// ```
#[derive(Clone, Debug)]
pub struct Cartesian {
    extents: IndexExtents,
    bounds: DomainBounds,
    h: Real3,
}

impl Cartesian {
    /// Build a grid from extents and physical bounds.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidExtents`] if any extent is smaller than
    /// one. Degenerate bounds are rejected by [`DomainBounds::new`].
    pub fn new(extents: IndexExtents, bounds: DomainBounds) -> Result<Self, MeshError> {
        for d in 0..3 {
            if extents.get(d) < 1 {
                return Err(MeshError::InvalidExtents {
                    dir: d,
                    extent: extents.get(d),
                });
            }
        }

        let span = bounds.span();
        let mut h = Real3::default();
        for d in 0..3 {
            // a single-cell direction has no spacing to speak of; the span
            // keeps location() finite and no lines are built along it
            let n = (extents.get(d) - 1).max(1);
            h[d] = span[d] / n as f64;
        }

        Ok(Self { extents, bounds, h })
    }

    /// Grid spacing along `dir`.
    #[inline]
    pub fn h(&self, dir: usize) -> f64 {
        self.h[dir]
    }

    #[inline]
    pub fn extents(&self) -> IndexExtents {
        self.extents
    }

    #[inline]
    pub fn bounds(&self) -> DomainBounds {
        self.bounds
    }

    /// Physical location of the cell center at `ijk`.
    #[inline]
    pub fn location(&self, ijk: Int3) -> Real3 {
        Real3::new(
            self.bounds.min[0] + ijk[0] as f64 * self.h[0],
            self.bounds.min[1] + ijk[1] as f64 * self.h[1],
            self.bounds.min[2] + ijk[2] as f64 * self.h[2],
        )
    }

    /// Whether `ijk` lies on the `right` (max) or left (min) face along
    /// `dir`.
    #[inline]
    pub fn on_boundary(&self, dir: usize, right: bool, ijk: Int3) -> bool {
        if right {
            ijk[dir] == self.extents.get(dir) - 1
        } else {
            ijk[dir] == 0
        }
    }

    #[inline]
    pub fn size(&self) -> i64 {
        self.extents.size()
    }
}
