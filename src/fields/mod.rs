//! Scalar fields and selectors over domain data.
//!
//! A [`Scalar`] couples the domain container with the three directional
//! boundary-value containers. [`FluidFilter`] and [`FaceSlab`] are the
//! selector types a mesh hands out for solid-skipping and face-restricted
//! access.

mod scalar;
mod selector;

pub use scalar::{Scalar, ScalarView, ScalarViewMut};
pub use selector::{FaceSlab, FluidFilter};
