//! Mesh / object intersection indexing.
//!
//! For each direction the grid is swept by axis-aligned rays through the
//! cell centers of the two transverse axes. Every ray is intersected with
//! every shape; the crossings are merged, sorted along the ray, and
//! annotated enter/exit by position parity, becoming [`MeshObjectInfo`]
//! records ordered by (slow, fast, direction). The cells strictly between
//! an enter/exit pair become the direction's solid-point list.

use super::cartesian::Cartesian;
use super::shape::Shape;
use crate::error::MeshError;
use crate::types::{slow_fast, Int3, Real3};

/// One intersection of an axis-aligned ray with a shape surface,
/// annotated with mesh indexing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshObjectInfo {
    /// Fractional distance from the fluid-side neighbor cell center to the
    /// surface, normalized by h and clamped to [0, 1].
    pub psi: f64,
    /// Location of the crossing in physical space.
    pub position: Real3,
    /// True when the ray is leaving the solid here (a "back" face).
    pub ray_outside: bool,
    /// The nearest interior-solid cell: first cell inside the solid after
    /// an entry, last cell inside before an exit.
    pub solid_coord: Int3,
    pub shape_id: i64,
}

/// Intersection lists R(d), per-shape partitions, and interior solid-point
/// lists S(d) for all three directions.
#[derive(Clone, Debug, Default)]
pub struct CutGeometry {
    // all intersections per direction, in (slow, fast, d) order
    r: [Vec<MeshObjectInfo>; 3],
    // the same intersections partitioned by shape id
    r_shape: [Vec<Vec<MeshObjectInfo>>; 3],
    // solid cells not adjacent to a d-intersection
    s: [Vec<Int3>; 3],
    // sorted, deduplicated linear indices of every solid cell
    solid_cells: Vec<i64>,
}

impl CutGeometry {
    /// Intersect `shapes` with the rays of a uniform mesh.
    ///
    /// # Errors
    ///
    /// With `check_domain` set, returns [`MeshError::ShapeOutsideDomain`]
    /// for any shape whose bounding region leaves the domain.
    pub fn new(shapes: &[Shape], cart: &Cartesian, check_domain: bool) -> Result<Self, MeshError> {
        for shape in shapes {
            assert!(
                (shape.id() as usize) < shapes.len(),
                "shape ids must be contiguous from zero"
            );
            if check_domain && !shape.fits_within(&cart.bounds()) {
                return Err(MeshError::ShapeOutsideDomain {
                    shape_id: shape.id(),
                });
            }
        }

        let mut geometry = Self {
            r: Default::default(),
            r_shape: std::array::from_fn(|_| vec![Vec::new(); shapes.len()]),
            s: Default::default(),
            solid_cells: Vec::new(),
        };

        let mut solid = Vec::new();
        for dir in 0..3 {
            geometry.init_direction(dir, shapes, cart, &mut solid);
            log::debug!(
                "cut geometry dir {}: {} intersections, {} interior solid points",
                dir,
                geometry.r[dir].len(),
                geometry.s[dir].len()
            );
        }

        solid.sort_unstable();
        solid.dedup();
        geometry.solid_cells = solid;

        Ok(geometry)
    }

    fn init_direction(
        &mut self,
        dir: usize,
        shapes: &[Shape],
        cart: &Cartesian,
        solid: &mut Vec<i64>,
    ) {
        let extents = cart.extents();
        let n = extents.get(dir);
        if n == 1 {
            return;
        }

        let (s_ax, f_ax) = slow_fast(dir);
        let h = cart.h(dir);
        let min = cart.bounds().min;

        for s in 0..extents.get(s_ax) {
            for f in 0..extents.get(f_ax) {
                let mut base = Int3::default();
                base[s_ax] = s;
                base[f_ax] = f;
                let origin = cart.location(base);

                // gather this ray's crossings from every shape and order
                // them along +dir
                let mut hits: Vec<(i64, super::shape::RayHit)> = Vec::new();
                for shape in shapes {
                    for hit in shape.intersect(origin, dir) {
                        hits.push((shape.id(), hit));
                    }
                }
                hits.sort_by(|a, b| a.1.position[dir].total_cmp(&b.1.position[dir]));

                let mut prev_enter: Option<i64> = None;
                for (index, (shape_id, hit)) in hits.into_iter().enumerate() {
                    // annotation is by position parity in the merged
                    // sequence, not by the contributing shape: the first
                    // crossing of a ray enters, the next leaves, and so on,
                    // which keeps the alternation invariant even when shape
                    // intervals interleave along the ray
                    let ray_outside = index % 2 == 1;

                    // fractional cell coordinate of the crossing
                    let t = (hit.position[dir] - min[dir]) / h;
                    let cell = if ray_outside {
                        t.ceil() as i64 - 1
                    } else {
                        t.floor() as i64 + 1
                    };
                    let psi = if ray_outside {
                        (t.ceil() - t).clamp(0.0, 1.0)
                    } else {
                        (t - t.floor()).clamp(0.0, 1.0)
                    };

                    let mut solid_coord = base;
                    solid_coord[dir] = cell.clamp(0, n - 1);

                    let info = MeshObjectInfo {
                        psi,
                        position: hit.position,
                        ray_outside,
                        solid_coord,
                        shape_id,
                    };
                    self.r[dir].push(info);
                    self.r_shape[dir][shape_id as usize].push(info);

                    if ray_outside {
                        // parity guarantees a pending entry
                        let enter = prev_enter.take().expect("exit without matching entry");
                        // everything strictly between the two rim cells is
                        // a fully interior solid point for this direction
                        for c in (enter + 1)..solid_coord[dir] {
                            let mut p = base;
                            p[dir] = c;
                            self.s[dir].push(p);
                        }
                        for c in enter..=solid_coord[dir] {
                            let mut p = base;
                            p[dir] = c;
                            solid.push(extents.ic(p));
                        }
                    } else {
                        prev_enter = Some(solid_coord[dir]);
                    }
                }
            }
        }
    }

    /// All intersections along direction `dir`, in invariant order.
    #[inline]
    pub fn r(&self, dir: usize) -> &[MeshObjectInfo] {
        &self.r[dir]
    }

    /// The intersections of one shape along `dir`, order preserved.
    pub fn r_shape(&self, dir: usize, shape_id: i64) -> &[MeshObjectInfo] {
        &self.r_shape[dir][shape_id as usize]
    }

    pub fn rx(&self) -> &[MeshObjectInfo] {
        self.r(0)
    }

    pub fn ry(&self) -> &[MeshObjectInfo] {
        self.r(1)
    }

    pub fn rz(&self) -> &[MeshObjectInfo] {
        self.r(2)
    }

    /// Solid cells with no `dir`-adjacent intersection.
    #[inline]
    pub fn s(&self, dir: usize) -> &[Int3] {
        &self.s[dir]
    }

    pub fn sx(&self) -> &[Int3] {
        self.s(0)
    }

    pub fn sy(&self) -> &[Int3] {
        self.s(1)
    }

    pub fn sz(&self) -> &[Int3] {
        self.s(2)
    }

    /// Sorted linear indices of every cell whose center lies inside a
    /// solid.
    #[inline]
    pub fn solid_cells(&self) -> &[i64] {
        &self.solid_cells
    }
}
