//! Gradient built from the three directional derivatives.

use super::derivative::Derivative;
use crate::bcs::{GridBcs, ObjectBcs};
use crate::fields::Scalar;
use crate::matrices::ApplyOp;
use crate::mesh::Mesh;
use crate::stencils::Stencil;

/// One [`Derivative`] per direction, applied into three separate output
/// fields.
///
/// The outputs are disjoint, so with the `parallel` feature the fan-out
/// runs the three directions concurrently.
#[derive(Clone, Debug)]
pub struct Gradient {
    components: [Derivative; 3],
}

impl Gradient {
    pub fn new<S: Stencil + ?Sized>(
        mesh: &Mesh,
        stencil: &S,
        grid_bcs: &GridBcs,
        obj_bcs: &ObjectBcs,
    ) -> Self {
        Self {
            components: [
                Derivative::new(0, mesh, stencil, grid_bcs, obj_bcs),
                Derivative::new(1, mesh, stencil, grid_bcs, obj_bcs),
                Derivative::new(2, mesh, stencil, grid_bcs, obj_bcs),
            ],
        }
    }

    #[inline]
    pub fn component(&self, dir: usize) -> &Derivative {
        &self.components[dir]
    }

    /// Apply every directional derivative: `du[i] = D_i(u)`.
    pub fn apply(&self, u: &Scalar, du: &mut [Scalar; 3], op: ApplyOp) {
        self.for_each(du, |d, out| d.apply(u, out, op));
    }

    /// Apply with prescribed Neumann wall data.
    pub fn apply_with_neumann(&self, u: &Scalar, nu: &Scalar, du: &mut [Scalar; 3], op: ApplyOp) {
        self.for_each(du, |d, out| d.apply_with_neumann(u, nu, out, op));
    }

    #[cfg(feature = "parallel")]
    fn for_each(&self, du: &mut [Scalar; 3], f: impl Fn(&Derivative, &mut Scalar) + Sync) {
        use rayon::prelude::*;
        self.components
            .as_slice()
            .par_iter()
            .zip(du.as_mut_slice().par_iter_mut())
            .for_each(|(d, out)| f(d, out));
    }

    #[cfg(not(feature = "parallel"))]
    fn for_each(&self, du: &mut [Scalar; 3], f: impl Fn(&Derivative, &mut Scalar)) {
        for (d, out) in self.components.iter().zip(du.iter_mut()) {
            f(d, out);
        }
    }
}
