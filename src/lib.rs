//! # cutcell
//!
//! A cut-cell finite-difference discretization library for structured 3D
//! Cartesian meshes with embedded curvilinear solids.
//!
//! This crate provides the core building blocks for immersed-boundary
//! finite-difference solvers:
//! - Uniform Cartesian grids with coordinate ↔ index mapping
//! - Mesh / object intersection indexing (cut-cell geometry)
//! - Per-direction line decomposition with boundary typing
//! - Sparse and blocked operators (dense, circulant, CSR, block)
//! - Scalar fields with domain and object-boundary containers
//! - Boundary-aware derivative operator assembly and application
//!
//! The derivative along direction `i` acts as `du = O·u_D + B·u_Rᵢ
//! (+ N·nu_D)` where `O` covers the field interior, `B` the object-surface
//! values, and `N` prescribed Neumann wall data.

pub mod bcs;
pub mod error;
pub mod fields;
pub mod matrices;
pub mod mesh;
pub mod operators;
pub mod stencils;
pub mod types;

// Re-export main types for convenience
pub use bcs::{BcType, FacePair, GridBcs, ObjectBcs};
pub use error::MeshError;
pub use fields::{FaceSlab, FluidFilter, Scalar, ScalarView, ScalarViewMut};
pub use matrices::{ApplyOp, Block, BlockBuilder, Circulant, Csr, CsrBuilder, Dense, InnerBlock};
pub use mesh::{
    make_sphere, Boundary, Cartesian, CutGeometry, Line, Mesh, MeshObjectInfo, ObjectBoundary,
    Shape, Sphere,
};
pub use operators::{Derivative, Gradient};
pub use stencils::{Stencil, StencilInfo, Identity, E2};
pub use types::{DomainBounds, IndexExtents, Int3, Real3};
