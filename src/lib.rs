//! # rips-skeleton
//!
//! 2-skeleton Vietoris-Rips complexes of planar point sets.
//!
//! ## Construction
//!
//! Given points p₀, …, pₙ₋₁ and a ball radius r:
//!
//! - **Edges**: pairs (i, j), i < j, whose closed radius-r balls
//!   intersect, i.e. |pᵢ - pⱼ| ≤ 2r (touching balls count)
//!
//! - **Triangles**: triples (i, j, k) that are pairwise edges
//!   (clique condition)
//!
//! Edges are found with one ball test per unordered pair. Each point
//! keeps only its neighbors of greater index, and triangles fall out of
//! intersecting those forward sets, which visits every triangle once.
//!
//! ## Example
//!
//! ```
//! use rips_skeleton::{compute_rips_complex, Point};
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(10.0, 10.0),
//! ];
//! let complex = compute_rips_complex(&points, 0.5).unwrap();
//! assert_eq!(complex.edges, vec![(0, 1), (0, 2)]);
//! assert!(complex.triangles.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod fixtures;
pub mod geometry;
pub mod topology;

pub use config::{FixtureConfig, RipsConfig};
pub use error::{ConfigError, RipsError};
pub use fixtures::DemoCloud;

// Re-exports from geometry
pub use geometry::{
    Point,
    points_from_array,
    points_to_array,
    distance_squared,
    balls_intersect,
    linear_map,
};

// Re-exports from topology
pub use topology::{
    // Complex construction
    RipsComplex,
    compute_rips_complex,
    NeighborTable,
    IndexSet,
    // Invariants
    BettiNumbers,
    BettiCurve,
    // Radius control
    RadiusScale,
    RadiusSweep,
};
