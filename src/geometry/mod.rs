//! Geometry Module: Planar Points and Ball Predicates
//!
//! Every simplex of the complex is decided by a single predicate: two
//! closed balls of radius r₀ and r₁ centred at a and b intersect iff
//!
//!   |a - b|² ≤ (r₀ + r₁)²
//!
//! Working with squared distances keeps the test free of square roots,
//! and the closed comparison makes tangent balls count as intersecting.

mod point;
mod predicates;

pub use point::{Point, points_from_array, points_to_array};
pub use predicates::{balls_intersect, distance_squared, linear_map};
