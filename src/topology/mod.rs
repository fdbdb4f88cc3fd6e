//! Topology Module: Rips Complexes and Their Invariants
//!
//! Builds the 2-skeleton of the Vietoris-Rips complex of a planar point
//! cloud and summarizes it:
//! - Forward neighbor table (intersection graph, greater indices only)
//! - Edges and triangles of VR_r(X)
//! - Betti numbers β₀, β₁ and Betti curves over radius sweeps
//!
//! ## Mathematical Background
//!
//! Centre a closed ball of radius r on every point. Two points span an
//! edge when their balls meet, three points span a triangle when all
//! three pairs do (clique condition). Increasing r yields a filtration
//! of nested complexes.

mod index_set;
mod neighbors;
mod vietoris_rips;
mod betti;
mod filtration;

pub use index_set::IndexSet;
pub use neighbors::NeighborTable;
pub use vietoris_rips::{RipsComplex, compute_rips_complex, triangles_from};
pub use betti::{BettiNumbers, BettiCurve, boundary_rank, count_components};
pub use filtration::{RadiusScale, RadiusSweep};
