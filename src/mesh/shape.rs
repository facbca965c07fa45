//! Analytic solid shapes embedded in the mesh.

use crate::types::{DomainBounds, Real3};

/// One crossing of an axis-aligned ray with a shape surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Location of the crossing in physical space.
    pub position: Real3,
    /// True when the ray is leaving the solid at this crossing.
    pub ray_outside: bool,
}

/// A solid sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub id: i64,
    pub center: Real3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(id: i64, center: Real3, radius: f64) -> Self {
        assert!(radius > 0.0, "sphere radius must be positive");
        Self { id, center, radius }
    }

    fn intersect(&self, origin: Real3, dir: usize) -> Vec<RayHit> {
        // squared distance from the center to the ray line
        let mut dist2 = 0.0;
        for a in 0..3 {
            if a != dir {
                let d = origin[a] - self.center[a];
                dist2 += d * d;
            }
        }
        let rem = self.radius * self.radius - dist2;
        if rem <= 0.0 {
            // miss; tangent rays carry no solid interval
            return Vec::new();
        }

        let half = rem.sqrt();
        let mut enter = origin;
        let mut exit = origin;
        enter[dir] = self.center[dir] - half;
        exit[dir] = self.center[dir] + half;
        vec![
            RayHit {
                position: enter,
                ray_outside: false,
            },
            RayHit {
                position: exit,
                ray_outside: true,
            },
        ]
    }

    fn fits_within(&self, bounds: &DomainBounds) -> bool {
        (0..3).all(|d| {
            self.center[d] - self.radius >= bounds.min[d]
                && self.center[d] + self.radius <= bounds.max[d]
        })
    }
}

/// An embedded solid object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
}

impl Shape {
    #[inline]
    pub fn id(&self) -> i64 {
        match self {
            Shape::Sphere(s) => s.id,
        }
    }

    /// Crossings of the axis-aligned ray through `origin` along `+dir`,
    /// ordered by increasing coordinate.
    pub fn intersect(&self, origin: Real3, dir: usize) -> Vec<RayHit> {
        match self {
            Shape::Sphere(s) => s.intersect(origin, dir),
        }
    }

    /// Whether the shape's bounding region stays inside the domain.
    pub fn fits_within(&self, bounds: &DomainBounds) -> bool {
        match self {
            Shape::Sphere(s) => s.fits_within(bounds),
        }
    }

    /// Whether a point lies inside the solid.
    pub fn contains(&self, p: Real3) -> bool {
        match self {
            Shape::Sphere(s) => (p - s.center).length() < s.radius,
        }
    }
}

/// Convenience constructor mirroring the shape-library entry point.
pub fn make_sphere(id: i64, center: Real3, radius: f64) -> Shape {
    Shape::Sphere(Sphere::new(id, center, radius))
}
