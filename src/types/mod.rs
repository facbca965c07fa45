//! Small strongly-typed value types shared across the crate.
//!
//! - [`Real3`] / [`Int3`] coordinate tuples with elementwise arithmetic
//! - [`IndexExtents`] grid size plus linearization and stride rules
//! - [`DomainBounds`] validated physical bounds

mod bounds;
mod extents;
mod vector;

pub use bounds::DomainBounds;
pub use extents::{slow_fast, IndexExtents};
pub use vector::{Int3, Real3};
