//! Composite scalar field: domain values plus directional boundary values.

use crate::mesh::Mesh;
use crate::types::Real3;
use std::ops::{AddAssign, MulAssign, SubAssign};

/// A scalar field over a cut-cell mesh.
///
/// Holds the domain container `d` (one value per cell, D-order) and the
/// three boundary-value containers `rx`, `ry`, `rz` (one value per object
/// intersection along the respective direction, in R(d) order).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scalar {
    pub d: Vec<f64>,
    pub rx: Vec<f64>,
    pub ry: Vec<f64>,
    pub rz: Vec<f64>,
}

impl Scalar {
    /// A zero field shaped for `mesh`.
    pub fn zeros(mesh: &Mesh) -> Self {
        Self {
            d: vec![0.0; mesh.size() as usize],
            rx: vec![0.0; mesh.rx().len()],
            ry: vec![0.0; mesh.ry().len()],
            rz: vec![0.0; mesh.rz().len()],
        }
    }

    /// The boundary values of direction `dir`.
    #[inline]
    pub fn r(&self, dir: usize) -> &[f64] {
        match dir {
            0 => &self.rx,
            1 => &self.ry,
            _ => &self.rz,
        }
    }

    #[inline]
    pub fn r_mut(&mut self, dir: usize) -> &mut [f64] {
        match dir {
            0 => &mut self.rx,
            1 => &mut self.ry,
            _ => &mut self.rz,
        }
    }

    /// Write `value` into every container.
    pub fn fill(&mut self, value: f64) {
        self.d.fill(value);
        self.rx.fill(value);
        self.ry.fill(value);
        self.rz.fill(value);
    }

    /// Fill the domain container from a function of cell-center location.
    pub fn set_domain_from(&mut self, mesh: &Mesh, f: impl Fn(Real3) -> f64) {
        for (slot, loc) in self.d.iter_mut().zip(mesh.location()) {
            *slot = f(loc);
        }
    }

    /// Fill the boundary containers from a function of the intersection
    /// surface positions.
    pub fn set_boundaries_from(&mut self, mesh: &Mesh, f: impl Fn(Real3) -> f64) {
        for dir in 0..3 {
            let values: Vec<f64> = mesh.r(dir).iter().map(|info| f(info.position)).collect();
            self.r_mut(dir).copy_from_slice(&values);
        }
    }

    /// Assign the domain container from any value sequence, consuming up
    /// to `d.len()` elements.
    pub fn assign_domain(&mut self, src: impl IntoIterator<Item = f64>) {
        for (slot, v) in self.d.iter_mut().zip(src) {
            *slot = v;
        }
    }

    /// `self + a * other`, elementwise over all four containers.
    pub fn add_scaled(&mut self, a: f64, other: &Scalar) {
        zip_apply(self, other, |x, y| *x += a * y);
    }

    /// A copy scaled by `a`.
    pub fn scaled(&self, a: f64) -> Scalar {
        let mut out = self.clone();
        out *= a;
        out
    }

    pub fn view(&self) -> ScalarView<'_> {
        ScalarView {
            d: &self.d,
            rx: &self.rx,
            ry: &self.ry,
            rz: &self.rz,
        }
    }

    pub fn view_mut(&mut self) -> ScalarViewMut<'_> {
        ScalarViewMut {
            d: &mut self.d,
            rx: &mut self.rx,
            ry: &mut self.ry,
            rz: &mut self.rz,
        }
    }
}

fn zip_apply(a: &mut Scalar, b: &Scalar, f: impl Fn(&mut f64, f64)) {
    debug_assert_eq!(a.d.len(), b.d.len());
    for (x, &y) in a.d.iter_mut().zip(&b.d) {
        f(x, y);
    }
    for (x, &y) in a.rx.iter_mut().zip(&b.rx) {
        f(x, y);
    }
    for (x, &y) in a.ry.iter_mut().zip(&b.ry) {
        f(x, y);
    }
    for (x, &y) in a.rz.iter_mut().zip(&b.rz) {
        f(x, y);
    }
}

impl AddAssign<&Scalar> for Scalar {
    fn add_assign(&mut self, rhs: &Scalar) {
        zip_apply(self, rhs, |x, y| *x += y);
    }
}

impl SubAssign<&Scalar> for Scalar {
    fn sub_assign(&mut self, rhs: &Scalar) {
        zip_apply(self, rhs, |x, y| *x -= y);
    }
}

impl MulAssign<f64> for Scalar {
    fn mul_assign(&mut self, rhs: f64) {
        for x in self
            .d
            .iter_mut()
            .chain(&mut self.rx)
            .chain(&mut self.ry)
            .chain(&mut self.rz)
        {
            *x *= rhs;
        }
    }
}

/// Borrowed view of a [`Scalar`].
#[derive(Clone, Copy, Debug)]
pub struct ScalarView<'a> {
    pub d: &'a [f64],
    pub rx: &'a [f64],
    pub ry: &'a [f64],
    pub rz: &'a [f64],
}

impl<'a> ScalarView<'a> {
    #[inline]
    pub fn r(&self, dir: usize) -> &'a [f64] {
        match dir {
            0 => self.rx,
            1 => self.ry,
            _ => self.rz,
        }
    }
}

/// Mutable borrowed view of a [`Scalar`].
#[derive(Debug)]
pub struct ScalarViewMut<'a> {
    pub d: &'a mut [f64],
    pub rx: &'a mut [f64],
    pub ry: &'a mut [f64],
    pub rz: &'a mut [f64],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DomainBounds, IndexExtents};

    fn mesh() -> Mesh {
        let bounds =
            DomainBounds::new(Real3::new(0.0, 0.0, 0.0), Real3::new(1.0, 1.0, 1.0)).unwrap();
        Mesh::new(IndexExtents::new(3, 3, 3), bounds).unwrap()
    }

    #[test]
    fn test_zeros_shape() {
        let m = mesh();
        let u = Scalar::zeros(&m);
        assert_eq!(u.d.len(), 27);
        assert!(u.rx.is_empty());
    }

    #[test]
    fn test_set_domain_from_location() {
        let m = mesh();
        let mut u = Scalar::zeros(&m);
        u.set_domain_from(&m, |p| p[0] + 10.0 * p[2]);
        // first cell at the origin, second one step in z
        assert_eq!(u.d[0], 0.0);
        assert!((u.d[1] - 5.0).abs() < 1e-14);
    }

    #[test]
    fn test_elementwise_ops() {
        let m = mesh();
        let mut u = Scalar::zeros(&m);
        u.fill(2.0);
        let v = u.clone();
        u += &v;
        assert!(u.d.iter().all(|&x| x == 4.0));
        u *= 0.5;
        assert!(u.d.iter().all(|&x| x == 2.0));
        u -= &v;
        assert!(u.d.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_add_scaled_linearity() {
        let m = mesh();
        let mut u = Scalar::zeros(&m);
        u.fill(1.0);
        let mut w = u.scaled(3.0);
        w.add_scaled(2.0, &u);
        assert!(w.d.iter().all(|&x| x == 5.0));
    }

    #[test]
    fn test_views_borrow_all_containers() {
        let m = mesh();
        let mut u = Scalar::zeros(&m);
        u.fill(3.0);
        {
            let v = u.view();
            assert_eq!(v.d.len(), 27);
            assert_eq!(v.r(0), u.rx.as_slice());
        }
        {
            let v = u.view_mut();
            v.d[0] = 9.0;
        }
        assert_eq!(u.d[0], 9.0);
    }

    #[test]
    fn test_assign_domain_partial() {
        let m = mesh();
        let mut u = Scalar::zeros(&m);
        u.assign_domain([1.0, 2.0]);
        assert_eq!(u.d[0], 1.0);
        assert_eq!(u.d[1], 2.0);
        assert_eq!(u.d[2], 0.0);
    }
}
