//! Directional derivative operator over a cut-cell mesh.

use crate::bcs::{BcType, GridBcs, ObjectBcs};
use crate::fields::Scalar;
use crate::matrices::{
    ApplyOp, Block, BlockBuilder, Circulant, Csr, CsrBuilder, Dense, InnerBlock,
};
use crate::mesh::Mesh;
use crate::stencils::{Stencil, StencilInfo};

/// The discrete derivative along one direction.
///
/// Assembled once from a mesh, a stencil, and the boundary-condition tags,
/// it holds three sub-operators:
///
/// - `O`: the block operator over interior field values
/// - `B`: object-surface contributions against the direction's
///   boundary-value container
/// - `N`: contributions against prescribed Neumann wall data
///
/// so that `du = O·u_D + B·u_R + N·nu_D`. Lines pinned by a transverse
/// Dirichlet face are skipped entirely and Dirichlet wall rows are dropped,
/// leaving those output entries untouched.
#[derive(Clone, Debug)]
pub struct Derivative {
    dir: usize,
    o: Block,
    b: Csr,
    n: Csr,
    interior_c: Vec<f64>,
}

impl Derivative {
    /// Assemble the derivative operator for direction `dir`.
    ///
    /// # Panics
    ///
    /// Panics when a stencil reports sizes beyond its advertised maximum,
    /// when an object carries a boundary condition other than Dirichlet,
    /// or when an object id has no entry in `obj_bcs`.
    pub fn new<S: Stencil + ?Sized>(
        dir: usize,
        mesh: &Mesh,
        stencil: &S,
        grid_bcs: &GridBcs,
        obj_bcs: &ObjectBcs,
    ) -> Self {
        let max = stencil.query_max();
        let h = mesh.h(dir);

        let mut interior_c = vec![0.0; 2 * max.p + 1];
        stencil.interior(h, &mut interior_c);

        // scratch sized for the worst boundary closure
        let mut left = vec![0.0; max.r * max.t];
        let mut right = vec![0.0; max.r * max.t];
        let mut extra = vec![0.0; max.ex];

        let mut o_builder = BlockBuilder::new();
        let mut b_builder = CsrBuilder::new();
        let mut n_builder = CsrBuilder::new();

        for line in mesh.lines(dir) {
            // derivatives along a line of pinned values are never used
            if mesh.dirichlet_line(line.start.mesh_coordinate, dir, grid_bcs) {
                continue;
            }

            let stride = line.stride;
            let mut columns =
                line.end.mesh_coordinate[dir] - line.start.mesh_coordinate[dir] + 1;
            let mut rows = columns;
            let mut row_offset = mesh.ic(line.start.mesh_coordinate);
            let mut col_offset = row_offset;

            let left_mat = if let Some(obj) = line.start.object {
                let bc = obj_bcs.get(obj.object_id);
                assert_eq!(
                    bc,
                    BcType::Dirichlet,
                    "only Dirichlet object boundaries are supported"
                );
                let info = checked_query(stencil, bc, &max);
                stencil.nbs(
                    h,
                    bc,
                    obj.psi,
                    false,
                    &mut left[..info.r * info.t],
                    &mut extra[..info.ex],
                );

                // the solid rim cell leaves the operator; rows shift one
                // stride in and the surface-value column moves to B
                rows -= 1;
                columns -= 1;
                row_offset += stride;
                col_offset += stride;

                for r in 0..info.r {
                    b_builder.add_point(
                        row_offset + stride * r as i64,
                        obj.object_coordinate,
                        left[r * info.t],
                    );
                }

                let mut coeffs = Vec::with_capacity(info.r * (info.t - 1));
                for r in 0..info.r {
                    coeffs.extend_from_slice(&left[r * info.t + 1..(r + 1) * info.t]);
                }
                Dense::new(info.r, info.t - 1, coeffs)
            } else {
                let bc = grid_bcs.dir(dir).left;
                let info = checked_query(stencil, bc, &max);
                stencil.nbs(
                    h,
                    bc,
                    1.0,
                    false,
                    &mut left[..info.r * info.t],
                    &mut extra[..info.ex],
                );

                match bc {
                    BcType::Dirichlet => {
                        rows -= 1;
                        row_offset += stride;
                    }
                    BcType::Neumann => {
                        for row in 0..info.ex {
                            n_builder.add_point(
                                row_offset + stride * row as i64,
                                row_offset,
                                extra[row],
                            );
                        }
                    }
                    BcType::Free => {}
                }
                Dense::new(info.r, info.t, left[..info.r * info.t].iter().copied())
            };

            let right_mat = if let Some(obj) = line.end.object {
                let bc = obj_bcs.get(obj.object_id);
                assert_eq!(
                    bc,
                    BcType::Dirichlet,
                    "only Dirichlet object boundaries are supported"
                );
                let info = checked_query(stencil, bc, &max);
                stencil.nbs(
                    h,
                    bc,
                    obj.psi,
                    true,
                    &mut right[..info.r * info.t],
                    &mut extra[..info.ex],
                );

                rows -= 1;
                columns -= 1;

                let boundary_offset =
                    mesh.ic(line.end.mesh_coordinate) - info.r as i64 * stride;
                for r in 0..info.r {
                    b_builder.add_point(
                        boundary_offset + stride * r as i64,
                        obj.object_coordinate,
                        right[r * info.t + info.t - 1],
                    );
                }

                let mut coeffs = Vec::with_capacity(info.r * (info.t - 1));
                for r in 0..info.r {
                    coeffs.extend_from_slice(&right[r * info.t..(r + 1) * info.t - 1]);
                }
                Dense::new(info.r, info.t - 1, coeffs)
            } else {
                let bc = grid_bcs.dir(dir).right;
                let info = checked_query(stencil, bc, &max);
                stencil.nbs(
                    h,
                    bc,
                    1.0,
                    true,
                    &mut right[..info.r * info.t],
                    &mut extra[..info.ex],
                );

                match bc {
                    BcType::Dirichlet => {
                        rows -= 1;
                    }
                    BcType::Neumann => {
                        let ic_end = mesh.ic(line.end.mesh_coordinate);
                        let boundary_offset = ic_end - (info.ex as i64 - 1) * stride;
                        for row in 0..info.ex {
                            n_builder.add_point(
                                boundary_offset + stride * row as i64,
                                ic_end,
                                extra[row],
                            );
                        }
                    }
                    BcType::Free => {}
                }
                Dense::new(info.r, info.t, right[..info.r * info.t].iter().copied())
            };

            let n_interior = rows - left_mat.rows() - right_mat.rows();
            o_builder.add_inner_block(InnerBlock::new(
                columns,
                row_offset,
                col_offset,
                stride,
                left_mat,
                Circulant::new(n_interior, &interior_c),
                right_mat,
            ));
        }

        let o = o_builder.to_block();
        let b = b_builder.to_csr(mesh.size());
        let n = n_builder.to_csr(mesh.size());
        log::debug!(
            "derivative dir {}: {} line blocks, |B| = {}, |N| = {}",
            dir,
            o.len(),
            b.nnz(),
            n.nnz()
        );

        Self {
            dir,
            o,
            b,
            n,
            interior_c,
        }
    }

    #[inline]
    pub fn dir(&self) -> usize {
        self.dir
    }

    /// The interior stencil coefficients this operator was built with.
    #[inline]
    pub fn interior_coefficients(&self) -> &[f64] {
        &self.interior_c
    }

    /// `du.d op= O·u.d`, then `du.d += B·u.R(dir)`.
    ///
    /// With `ApplyOp::Assign`, only rows covered by the operator are
    /// overwritten; dropped Dirichlet rows and skipped lines keep whatever
    /// `du` already holds.
    pub fn apply(&self, u: &Scalar, du: &mut Scalar, op: ApplyOp) {
        self.o.apply(&u.d, &mut du.d, op);
        self.b.apply(u.r(self.dir), &mut du.d);
    }

    /// [`apply`](Self::apply), then `du.d += N·nu.d` for prescribed
    /// Neumann wall data.
    pub fn apply_with_neumann(&self, u: &Scalar, nu: &Scalar, du: &mut Scalar, op: ApplyOp) {
        self.apply(u, du, op);
        self.n.apply(&nu.d, &mut du.d);
    }
}

fn checked_query<S: Stencil + ?Sized>(stencil: &S, bc: BcType, max: &StencilInfo) -> StencilInfo {
    let info = stencil.query(bc);
    assert!(
        info.r <= max.r && info.t <= max.t && info.ex <= max.ex,
        "stencil reports sizes beyond its advertised maximum"
    );
    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bcs::{DD, FF};
    use crate::stencils::Identity;
    use crate::types::{DomainBounds, IndexExtents, Real3};

    fn mesh() -> Mesh {
        let bounds =
            DomainBounds::new(Real3::new(-1.0, -1.0, 0.0), Real3::new(1.0, 2.0, 2.2)).unwrap();
        Mesh::new(IndexExtents::new(5, 7, 6), bounds).unwrap()
    }

    #[test]
    fn test_identity_free_round_trip() {
        let m = mesh();
        let bcs = GridBcs::new(FF, FF, FF);
        let obj = ObjectBcs::default();

        let mut u = Scalar::zeros(&m);
        u.set_domain_from(&m, |p| p[0] * 2.0 + p[1] - p[2]);

        for dir in 0..3 {
            let d = Derivative::new(dir, &m, &Identity, &bcs, &obj);
            let mut du = Scalar::zeros(&m);
            d.apply(&u, &mut du, ApplyOp::Assign);
            assert_eq!(du.d, u.d, "direction {}", dir);
        }
    }

    #[test]
    fn test_dirichlet_rows_stay_zero() {
        let m = mesh();
        let bcs = GridBcs::new(DD, FF, FF);
        let obj = ObjectBcs::default();

        let mut u = Scalar::zeros(&m);
        u.fill(1.0);

        let d = Derivative::new(0, &m, &Identity, &bcs, &obj);
        let mut du = Scalar::zeros(&m);
        d.apply(&u, &mut du, ApplyOp::Assign);

        for i in m.xmin().indices().chain(m.xmax().indices()) {
            assert_eq!(du.d[i], 0.0);
        }
        // the interior is still the identity
        let inner = m.ic(crate::types::Int3::new(2, 3, 3)) as usize;
        assert_eq!(du.d[inner], 1.0);
    }

    #[test]
    fn test_accumulate_doubles() {
        let m = mesh();
        let bcs = GridBcs::new(FF, FF, FF);
        let obj = ObjectBcs::default();

        let mut u = Scalar::zeros(&m);
        u.set_domain_from(&m, |p| p[0] + p[1] * p[2]);

        let d = Derivative::new(1, &m, &Identity, &bcs, &obj);
        let mut du = Scalar::zeros(&m);
        d.apply(&u, &mut du, ApplyOp::Assign);
        d.apply(&u, &mut du, ApplyOp::Accumulate);

        for (a, b) in du.d.iter().zip(&u.d) {
            assert!((a - 2.0 * b).abs() < 1e-14);
        }
    }

    #[test]
    #[should_panic(expected = "only Dirichlet")]
    fn test_non_dirichlet_object_rejected() {
        let bounds =
            DomainBounds::new(Real3::new(-1.0, -1.0, 0.0), Real3::new(1.0, 2.0, 2.2)).unwrap();
        let m = Mesh::with_shapes(
            IndexExtents::new(21, 22, 23),
            bounds,
            vec![crate::mesh::make_sphere(0, Real3::new(0.01, -0.01, 0.5), 0.25)],
        )
        .unwrap();
        let obj = ObjectBcs(vec![BcType::Neumann]);
        Derivative::new(0, &m, &Identity, &GridBcs::new(FF, FF, FF), &obj);
    }
}
