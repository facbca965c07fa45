//! Second-order explicit second-derivative stencil.

use super::{Stencil, StencilInfo};
use crate::bcs::BcType;

/// Second derivative along one axis, second order in the interior with
/// one-sided and cut-aware boundary closures.
///
/// - interior: `[1, -2, 1] / h²`
/// - Free walls: the four-point one-sided row, exact through cubics
/// - Neumann walls: a two-point row plus one coefficient against the
///   prescribed wall derivative
/// - Dirichlet walls: a four-point row over the boundary value and the
///   first three fluid cells, with weights for the nonuniform spacing
///   `{-ψh, 0, h, 2h}`; at ψ = 1 it collapses to the centered row, at
///   ψ = 0 the surface sits on the wall node and a shifted one-sided row
///   is used instead
#[derive(Clone, Copy, Debug, Default)]
pub struct E2;

impl Stencil for E2 {
    fn query(&self, bc: BcType) -> StencilInfo {
        match bc {
            BcType::Neumann => StencilInfo {
                p: 1,
                r: 1,
                t: 2,
                ex: 1,
            },
            _ => StencilInfo {
                p: 1,
                r: 1,
                t: 4,
                ex: 0,
            },
        }
    }

    fn query_max(&self) -> StencilInfo {
        StencilInfo {
            p: 1,
            r: 1,
            t: 4,
            ex: 1,
        }
    }

    fn interior(&self, h: f64, out: &mut [f64]) {
        let h2 = h * h;
        out[0] = 1.0 / h2;
        out[1] = -2.0 / h2;
        out[2] = 1.0 / h2;
    }

    fn nbs(
        &self,
        h: f64,
        bc: BcType,
        psi: f64,
        right_wall: bool,
        out: &mut [f64],
        extra: &mut [f64],
    ) {
        assert!((0.0..=1.0).contains(&psi));
        let h2 = h * h;

        match bc {
            BcType::Free => {
                if right_wall {
                    out[..4].copy_from_slice(&[-1.0 / h2, 4.0 / h2, -5.0 / h2, 2.0 / h2]);
                } else {
                    out[..4].copy_from_slice(&[2.0 / h2, -5.0 / h2, 4.0 / h2, -1.0 / h2]);
                }
            }
            BcType::Neumann => {
                if right_wall {
                    out[..2].copy_from_slice(&[2.0 / h2, -2.0 / h2]);
                    extra[0] = 2.0 / h;
                } else {
                    out[..2].copy_from_slice(&[-2.0 / h2, 2.0 / h2]);
                    extra[0] = -2.0 / h;
                }
            }
            BcType::Dirichlet => {
                let row = dirichlet_row(h, psi);
                if right_wall {
                    out[..4].copy_from_slice(&[row[3], row[2], row[1], row[0]]);
                } else {
                    out[..4].copy_from_slice(&row);
                }
            }
        }
    }
}

/// Weights of `u''(0)` over the points `{-psi*h, 0, h, 2h}`, surface first.
fn dirichlet_row(h: f64, psi: f64) -> [f64; 4] {
    let h2 = h * h;
    if psi == 0.0 {
        // surface on the wall node: one-sided over {0, h, 2h}, with the
        // node's coefficient carried by the known boundary value
        return [1.0 / h2, 0.0, -2.0 / h2, 1.0 / h2];
    }
    let a = psi * h;
    [
        6.0 * h / (a * (a + h) * (a + 2.0 * h)),
        (a - 3.0 * h) / (a * h2),
        2.0 * (2.0 * h - a) / (h2 * (a + h)),
        (a - h) / (h2 * (a + 2.0 * h)),
    ]
}
