//! Neighbor Table: Forward Adjacency of the Intersection Graph
//!
//! For points p₀, …, pₙ₋₁ and radius r, row i of the table holds
//!
//!   N⁺(i) = { j > i : |pᵢ - pⱼ| ≤ 2r }
//!
//! Only greater indices are stored. Besides halving the memory, this is
//! what lets the triangle pass visit each triangle exactly once: a
//! triangle {i < j < k} is only reachable as i → j ∈ N⁺(i) → k ∈ N⁺(i) ∩ N⁺(j).
//! Storing symmetric adjacency here would emit every triangle several times.

use tracing::debug;

use super::IndexSet;
use crate::geometry::{balls_intersect, Point};

/// Forward adjacency sets, one per point
#[derive(Debug, Clone, Default)]
pub struct NeighborTable {
    rows: Vec<IndexSet>,
}

impl NeighborTable {
    /// Build the table and collect every edge along the way
    ///
    /// Tests each unordered pair once (O(n²) predicate calls). Edges come
    /// out ordered by i, then by j. Inputs are assumed already validated.
    pub fn build(points: &[Point], radius: f64) -> (Self, Vec<(usize, usize)>) {
        let n = points.len();
        let mut rows = Vec::with_capacity(n);
        let mut edges = Vec::new();

        for (i, a) in points.iter().enumerate() {
            let mut row = IndexSet::new();
            for (j, b) in points.iter().enumerate().skip(i + 1) {
                if balls_intersect(a.x, a.y, radius, b.x, b.y, radius) {
                    row.insert(j);
                    edges.push((i, j));
                }
            }
            rows.push(row);
        }

        debug!(n_points = n, radius, n_edges = edges.len(), "built neighbor table");

        (Self { rows }, edges)
    }

    /// Forward neighbors of point `i` (all greater than `i`)
    pub fn forward(&self, i: usize) -> &IndexSet {
        &self.rows[i]
    }

    pub fn n_points(&self) -> usize {
        self.rows.len()
    }

    /// Iterate (i, N⁺(i)) in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &IndexSet)> {
        self.rows.iter().enumerate()
    }

    /// Total number of edges recorded in the table
    pub fn n_edges(&self) -> usize {
        self.rows.iter().map(IndexSet::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Vec<Point> {
        (0..n).map(|i| Point::new(i as f64, 0.0)).collect()
    }

    #[test]
    fn test_forward_only() {
        // Unit spacing, reach 2r = 1: only consecutive points connect
        let (table, edges) = NeighborTable::build(&line(4), 0.5);

        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(table.forward(0).as_slice(), &[1]);
        assert_eq!(table.forward(2).as_slice(), &[3]);
        assert!(table.forward(3).is_empty());
        assert_eq!(table.n_edges(), edges.len());
    }

    #[test]
    fn test_edge_order() {
        let (table, edges) = NeighborTable::build(&line(4), 1.0);

        assert_eq!(edges, vec![(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)]);
        for (i, row) in table.iter() {
            assert!(row.iter().all(|j| j > i));
        }
    }

    #[test]
    fn test_empty() {
        let (table, edges) = NeighborTable::build(&[], 1.0);
        assert_eq!(table.n_points(), 0);
        assert!(edges.is_empty());
    }
}
