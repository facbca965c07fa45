//! Finite-difference stencil coefficient generators.
//!
//! A stencil produces the interior coefficients of a derivative operator
//! and the irregular boundary rows needed near domain faces and object
//! surfaces. The derivative assembly queries capacities up front and hands
//! the stencil pre-sized scratch buffers to fill.

mod e2;
mod identity;

pub use e2::E2;
pub use identity::Identity;

use crate::bcs::BcType;

/// Sizes a stencil reports for its boundary closures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StencilInfo {
    /// Interior half-width; the interior row has `2p + 1` coefficients.
    pub p: usize,
    /// Number of boundary rows.
    pub r: usize,
    /// Number of columns per boundary row.
    pub t: usize,
    /// Number of extra coefficients multiplying prescribed Neumann data.
    pub ex: usize,
}

/// Coefficient generator for one finite-difference operator.
///
/// Boundary rows follow a fixed anchoring contract:
///
/// - **Free / Neumann**: rows are the `r` cells nearest the wall, wall row
///   included; columns are the `t` cells nearest the wall.
/// - **Dirichlet**: rows are the `r` cells nearest the wall excluding the
///   wall row itself; the wall-side column (first on the left, last on the
///   right) multiplies the boundary value. `psi` is the fractional wall
///   distance — domain faces pass ψ = 1, object surfaces pass their cut
///   distance.
///
/// `nbs` fills `out` with `r * t` coefficients row-major, nearest-wall row
/// first, and `extra` with the `ex` Neumann-data coefficients.
pub trait Stencil {
    /// Sizes for a specific boundary-condition type.
    fn query(&self, bc: BcType) -> StencilInfo;

    /// Worst-case sizes across all boundary-condition types.
    fn query_max(&self) -> StencilInfo;

    /// Fill the `2p + 1` interior coefficients.
    fn interior(&self, h: f64, out: &mut [f64]);

    /// Fill the boundary rows for one wall.
    fn nbs(
        &self,
        h: f64,
        bc: BcType,
        psi: f64,
        right_wall: bool,
        out: &mut [f64],
        extra: &mut [f64],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    // every stencil must honor its advertised worst-case capacities
    fn check_capacities(st: &dyn Stencil) {
        let max = st.query_max();
        for bc in [BcType::Dirichlet, BcType::Neumann, BcType::Free] {
            let info = st.query(bc);
            assert!(info.p <= max.p);
            assert!(info.r <= max.r);
            assert!(info.t <= max.t);
            assert!(info.ex <= max.ex);
        }
    }

    #[test]
    fn test_identity_capacities() {
        check_capacities(&Identity);
    }

    #[test]
    fn test_e2_capacities() {
        check_capacities(&E2);
    }
}
