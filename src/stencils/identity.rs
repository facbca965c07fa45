//! Identity stencil for exercising operator assembly.

use super::{Stencil, StencilInfo};
use crate::bcs::BcType;

/// A stencil whose assembled operator reproduces its input, used to test
/// the assembly and application machinery independent of any derivative
/// approximation.
///
/// The Neumann closure reproduces the identity only jointly with the
/// N-operator contribution, which makes it exercise that path too: apply
/// with `nu == u` and the combination collapses to `du == u`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl Stencil for Identity {
    fn query(&self, bc: BcType) -> StencilInfo {
        match bc {
            BcType::Neumann => StencilInfo {
                p: 0,
                r: 2,
                t: 3,
                ex: 2,
            },
            _ => StencilInfo {
                p: 0,
                r: 2,
                t: 3,
                ex: 0,
            },
        }
    }

    fn query_max(&self) -> StencilInfo {
        StencilInfo {
            p: 0,
            r: 2,
            t: 3,
            ex: 2,
        }
    }

    fn interior(&self, _h: f64, out: &mut [f64]) {
        out[0] = 1.0;
    }

    fn nbs(
        &self,
        _h: f64,
        bc: BcType,
        psi: f64,
        right_wall: bool,
        out: &mut [f64],
        extra: &mut [f64],
    ) {
        assert!((0.0..=1.0).contains(&psi));

        match (bc, right_wall) {
            (BcType::Neumann, false) => {
                extra[..2].copy_from_slice(&[2.0, 1.0]);
                out[..6].copy_from_slice(&[-1.0, 0.0, 0.0, -1.0, 1.0, 0.0]);
            }
            (BcType::Neumann, true) => {
                extra[..2].copy_from_slice(&[1.0, 2.0]);
                out[..6].copy_from_slice(&[0.0, 1.0, -1.0, 0.0, 0.0, -1.0]);
            }
            // Dirichlet rows sit one cell in from the wall; the wall-side
            // column carries the (unused) boundary value
            (BcType::Dirichlet, false) => {
                out[..6].copy_from_slice(&[0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
            }
            (BcType::Dirichlet, true) => {
                out[..6].copy_from_slice(&[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
            }
            (BcType::Free, false) => {
                out[..6].copy_from_slice(&[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
            }
            (BcType::Free, true) => {
                out[..6].copy_from_slice(&[0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
            }
        }
    }
}
