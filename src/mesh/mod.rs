//! Cut-cell mesh: a uniform Cartesian grid with embedded solid objects.
//!
//! - [`Cartesian`]: extents, spacing, coordinate ↔ index mapping
//! - [`Shape`] / [`make_sphere`]: analytic solids and ray intersection
//! - [`CutGeometry`]: per-direction intersection and solid-point lists
//! - [`Line`] / [`Boundary`]: maximal fluid runs between boundaries
//! - [`Mesh`]: the assembled whole, plus selectors over the domain data

mod cartesian;
mod cut_geometry;
mod line;
mod shape;

pub use cartesian::Cartesian;
pub use cut_geometry::{CutGeometry, MeshObjectInfo};
pub use line::{Boundary, Line, ObjectBoundary};
pub use shape::{make_sphere, RayHit, Shape, Sphere};

use crate::bcs::{BcType, GridBcs};
use crate::error::MeshError;
use crate::fields::{FaceSlab, FluidFilter};
use crate::types::{DomainBounds, IndexExtents, Int3, Real3};

/// A Cartesian mesh cut by solid objects, with the per-direction line
/// decomposition used to assemble derivative operators.
#[derive(Clone, Debug)]
pub struct Mesh {
    cart: Cartesian,
    geometry: CutGeometry,
    lines: [Vec<Line>; 3],
    fluid: FluidFilter,
}

impl Mesh {
    /// A mesh without embedded objects.
    pub fn new(extents: IndexExtents, bounds: DomainBounds) -> Result<Self, MeshError> {
        Self::with_shapes(extents, bounds, Vec::new())
    }

    /// A mesh cut by `shapes`. Shape ids must be contiguous from zero;
    /// shapes leaving the domain are rejected.
    pub fn with_shapes(
        extents: IndexExtents,
        bounds: DomainBounds,
        shapes: Vec<Shape>,
    ) -> Result<Self, MeshError> {
        let cart = Cartesian::new(extents, bounds)?;
        let geometry = CutGeometry::new(&shapes, &cart, true)?;

        let lines = [
            line::build_lines(0, extents, geometry.r(0)),
            line::build_lines(1, extents, geometry.r(1)),
            line::build_lines(2, extents, geometry.r(2)),
        ];
        log::debug!(
            "mesh {}x{}x{}: {} / {} / {} lines",
            extents.get(0),
            extents.get(1),
            extents.get(2),
            lines[0].len(),
            lines[1].len(),
            lines[2].len()
        );

        let fluid = FluidFilter::new(geometry.solid_cells(), cart.size() as usize);

        Ok(Self {
            cart,
            geometry,
            lines,
            fluid,
        })
    }

    #[inline]
    pub fn h(&self, dir: usize) -> f64 {
        self.cart.h(dir)
    }

    #[inline]
    pub fn extents(&self) -> IndexExtents {
        self.cart.extents()
    }

    #[inline]
    pub fn size(&self) -> i64 {
        self.cart.size()
    }

    #[inline]
    pub fn dims(&self) -> usize {
        3
    }

    /// Linear index of a mesh coordinate.
    #[inline]
    pub fn ic(&self, ijk: Int3) -> i64 {
        self.cart.extents().ic(ijk)
    }

    #[inline]
    pub fn cartesian(&self) -> &Cartesian {
        &self.cart
    }

    #[inline]
    pub fn geometry(&self) -> &CutGeometry {
        &self.geometry
    }

    /// The lines of direction `dir`, ordered by (slow, fast) pair then by
    /// position along `dir`.
    #[inline]
    pub fn lines(&self, dir: usize) -> &[Line] {
        &self.lines[dir]
    }

    /// Intersections along `dir` (all shapes).
    #[inline]
    pub fn r(&self, dir: usize) -> &[MeshObjectInfo] {
        self.geometry.r(dir)
    }

    pub fn rx(&self) -> &[MeshObjectInfo] {
        self.geometry.rx()
    }

    pub fn ry(&self) -> &[MeshObjectInfo] {
        self.geometry.ry()
    }

    pub fn rz(&self) -> &[MeshObjectInfo] {
        self.geometry.rz()
    }

    /// True when the line starting at `start` runs along a Dirichlet face
    /// of some direction other than `dir` — its values are pinned, so no
    /// derivative rows are assembled for it.
    pub fn dirichlet_line(&self, start: Int3, dir: usize, grid_bcs: &GridBcs) -> bool {
        let on_dirichlet_face = |d: usize| {
            (grid_bcs.dir(d).left == BcType::Dirichlet && self.cart.on_boundary(d, false, start))
                || (grid_bcs.dir(d).right == BcType::Dirichlet
                    && self.cart.on_boundary(d, true, start))
        };
        (0..3).filter(|&d| d != dir).any(on_dirichlet_face)
    }

    /// The fluid-only filter over the domain container: skips every cell
    /// whose center lies inside a solid.
    #[inline]
    pub fn f(&self) -> &FluidFilter {
        &self.fluid
    }

    /// A directional filter skipping only the cells S(dir) with no
    /// `dir`-adjacent intersection; rim cells stay visible.
    pub fn f_dir(&self, dir: usize) -> FluidFilter {
        let mut solid: Vec<i64> = self.geometry.s(dir).iter().map(|&p| self.ic(p)).collect();
        solid.sort_unstable();
        FluidFilter::new(&solid, self.size() as usize)
    }

    /// Cell-center locations in D-order.
    pub fn location(&self) -> impl Iterator<Item = Real3> + '_ {
        let n = self.cart.extents();
        (0..n.get(0)).flat_map(move |i| {
            (0..n.get(1)).flat_map(move |j| {
                (0..n.get(2)).map(move |k| self.cart.location(Int3::new(i, j, k)))
            })
        })
    }

    pub fn xmin(&self) -> FaceSlab {
        FaceSlab::new(self.extents(), 0, false)
    }

    pub fn xmax(&self) -> FaceSlab {
        FaceSlab::new(self.extents(), 0, true)
    }

    pub fn ymin(&self) -> FaceSlab {
        FaceSlab::new(self.extents(), 1, false)
    }

    pub fn ymax(&self) -> FaceSlab {
        FaceSlab::new(self.extents(), 1, true)
    }

    pub fn zmin(&self) -> FaceSlab {
        FaceSlab::new(self.extents(), 2, false)
    }

    pub fn zmax(&self) -> FaceSlab {
        FaceSlab::new(self.extents(), 2, true)
    }
}
