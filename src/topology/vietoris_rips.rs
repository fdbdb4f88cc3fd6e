//! Vietoris-Rips Complex Construction
//!
//! The 2-skeleton of the Vietoris-Rips complex VR_r(X) for a planar
//! point set X and ball radius r:
//! - 0-simplices are the points in X
//! - an edge [i, j] exists iff the radius-r balls around pᵢ and pⱼ meet,
//!   i.e. |pᵢ - pⱼ| ≤ 2r
//! - a triangle [i, j, k] exists iff all three of its edges exist
//!
//! Triangles are found by intersecting forward neighbor sets: for every
//! edge i → j, each k ∈ N⁺(i) ∩ N⁺(j) closes a triangle (i, j, k) with
//! i < j < k. Because N⁺ only holds greater indices, no other ordering
//! of the same three points can reach that branch, so each triangle is
//! produced exactly once.

use ndarray::Array2;
use serde::Serialize;
use tracing::debug;

use super::NeighborTable;
use crate::error::RipsError;
use crate::geometry::{points_from_array, Point};

/// Edges and triangles of VR_r(X)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RipsComplex {
    /// Number of vertices
    pub n_points: usize,
    /// Ball radius the complex was built for
    pub radius: f64,
    /// 1-simplices (i, j) with i < j, ordered by i then j
    pub edges: Vec<(usize, usize)>,
    /// 2-simplices (i, j, k) with i < j < k; order carries no meaning
    pub triangles: Vec<(usize, usize, usize)>,
}

impl RipsComplex {
    /// Same as [`compute_rips_complex`]
    pub fn build(points: &[Point], radius: f64) -> Result<Self, RipsError> {
        compute_rips_complex(points, radius)
    }

    /// Build from an n x 2 coordinate matrix
    pub fn from_array(coords: &Array2<f64>, radius: f64) -> Result<Self, RipsError> {
        let points = points_from_array(coords)?;
        compute_rips_complex(&points, radius)
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn n_triangles(&self) -> usize {
        self.triangles.len()
    }

    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        let key = if i < j { (i, j) } else { (j, i) };
        self.edges.binary_search(&key).is_ok()
    }
}

/// Compute the 2-skeleton Vietoris-Rips complex of `points` at `radius`
///
/// Point indices in the output refer to positions in `points`.
///
/// # Errors
/// Fails before doing any work if `radius` is negative or not finite, or
/// if any coordinate is NaN or infinite.
pub fn compute_rips_complex(points: &[Point], radius: f64) -> Result<RipsComplex, RipsError> {
    validate(points, radius)?;

    let (table, edges) = NeighborTable::build(points, radius);
    let triangles = triangles_from(&table);

    debug!(
        n_points = points.len(),
        radius,
        n_edges = edges.len(),
        n_triangles = triangles.len(),
        "computed rips complex"
    );

    Ok(RipsComplex {
        n_points: points.len(),
        radius,
        edges,
        triangles,
    })
}

/// Derive every triangle from a forward neighbor table
pub fn triangles_from(table: &NeighborTable) -> Vec<(usize, usize, usize)> {
    let mut triangles = Vec::new();

    for (i, forward_i) in table.iter() {
        for j in forward_i {
            for k in &forward_i.intersection(table.forward(j)) {
                triangles.push((i, j, k));
            }
        }
    }

    triangles
}

fn validate(points: &[Point], radius: f64) -> Result<(), RipsError> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(RipsError::InvalidRadius(radius));
    }

    if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
        return Err(RipsError::NonFiniteCoordinate {
            index,
            x: p.x,
            y: p.y,
        });
    }

    Ok(())
}
