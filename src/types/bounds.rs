//! Physical domain bounds.

use super::Real3;
use crate::error::MeshError;

/// Axis-aligned physical extent of the computational domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DomainBounds {
    pub min: Real3,
    pub max: Real3,
}

impl DomainBounds {
    /// Create validated domain bounds.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidBounds`] if `min[d] >= max[d]` for any
    /// direction.
    pub fn new(min: Real3, max: Real3) -> Result<Self, MeshError> {
        for d in 0..3 {
            if min[d] >= max[d] {
                return Err(MeshError::InvalidBounds {
                    dir: d,
                    min: min[d],
                    max: max[d],
                });
            }
        }
        Ok(Self { min, max })
    }

    /// Physical span in each direction.
    #[inline]
    pub fn span(&self) -> Real3 {
        self.max - self.min
    }

    /// Whether a point lies inside the domain (inclusive).
    pub fn contains(&self, p: Real3) -> bool {
        (0..3).all(|d| p[d] >= self.min[d] && p[d] <= self.max[d])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bounds() {
        let b = DomainBounds::new(Real3::new(-1.0, -1.0, 0.0), Real3::new(1.0, 2.0, 2.2)).unwrap();
        assert_eq!(b.span(), Real3::new(2.0, 3.0, 2.2));
        assert!(b.contains(Real3::new(0.0, 0.0, 1.0)));
        assert!(!b.contains(Real3::new(0.0, 3.0, 1.0)));
    }

    #[test]
    fn test_degenerate_bounds_rejected() {
        let err = DomainBounds::new(Real3::new(0.0, 0.0, 0.0), Real3::new(1.0, 0.0, 1.0));
        assert!(matches!(err, Err(MeshError::InvalidBounds { dir: 1, .. })));
    }
}
