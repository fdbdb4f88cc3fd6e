//! Betti Numbers: Topological Invariants
//!
//! The k-th Betti number βₖ counts the number of k-dimensional
//! "holes" in a topological space:
//!
//! - β₀: Number of connected components
//! - β₁: Number of 1-dimensional loops/cycles
//! - β₂: Number of 2-dimensional voids (hollow triangle shells)
//!
//! Over Z/2Z, with ∂₂ the boundary map from triangles to edges:
//!
//!   β₀ = V - rank(∂₁)
//!   β₁ = E - rank(∂₁) - rank(∂₂) = E - V + β₀ - rank(∂₂)
//!   β₂ = F - rank(∂₂)
//!
//! β₀ comes from union-find; rank(∂₂) from column reduction of the
//! sparse boundary matrix. The complex has no 3-simplices, so any four
//! mutually close points form a hollow tetrahedron and count toward β₂.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::{RadiusSweep, RipsComplex};
use crate::error::RipsError;
use crate::geometry::Point;

/// Betti numbers of a complex at one radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BettiNumbers {
    pub beta_0: usize, // Connected components
    pub beta_1: usize, // Loops
    pub beta_2: usize, // Voids
    pub radius: f64,
    n_vertices: usize,
    n_edges: usize,
    n_triangles: usize,
}

impl BettiNumbers {
    /// Summarize a computed complex
    pub fn of(complex: &RipsComplex) -> Self {
        let v = complex.n_points;
        let e = complex.n_edges();
        let f = complex.n_triangles();
        let beta_0 = count_components(v, &complex.edges);
        let rank_2 = boundary_rank(&complex.edges, &complex.triangles);

        // rank(∂₁) = V - β₀ ≤ E, and rank(∂₂) ≤ dim ker ∂₁
        let beta_1 = e - (v - beta_0) - rank_2;
        let beta_2 = f - rank_2;

        Self {
            beta_0,
            beta_1,
            beta_2,
            radius: complex.radius,
            n_vertices: v,
            n_edges: e,
            n_triangles: f,
        }
    }

    /// Euler characteristic χ = V - E + F
    pub fn euler_characteristic(&self) -> i64 {
        self.n_vertices as i64 - self.n_edges as i64 + self.n_triangles as i64
    }

    pub fn total(&self) -> usize {
        self.beta_0 + self.beta_1 + self.beta_2
    }
}

/// Sparse column of the boundary matrix over Z/2Z
#[derive(Debug, Clone)]
struct SparseColumn {
    rows: BTreeSet<usize>,
}

impl SparseColumn {
    fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self { rows: indices.into_iter().collect() }
    }

    /// Lowest (maximum) non-zero row
    fn low(&self) -> Option<usize> {
        self.rows.iter().next_back().copied()
    }

    /// Symmetric difference: addition in Z/2Z
    fn add_assign(&mut self, other: &SparseColumn) {
        for &row in &other.rows {
            if !self.rows.remove(&row) {
                self.rows.insert(row);
            }
        }
    }
}

/// Rank of ∂₂ over Z/2Z by standard column reduction
///
/// `edges` must be sorted (as produced by the neighbor table); every
/// triangle's three edges must be present.
pub fn boundary_rank(edges: &[(usize, usize)], triangles: &[(usize, usize, usize)]) -> usize {
    let edge_index = |a: usize, b: usize| edges.binary_search(&(a.min(b), a.max(b))).ok();

    // low row -> reduced column owning that pivot
    let mut pivots: HashMap<usize, SparseColumn> = HashMap::new();

    for &(i, j, k) in triangles {
        let faces = [edge_index(i, j), edge_index(i, k), edge_index(j, k)];
        let mut column = SparseColumn::from_indices(faces.into_iter().flatten());

        while let Some(low) = column.low() {
            match pivots.get(&low) {
                Some(pivot) => column.add_assign(pivot),
                None => {
                    pivots.insert(low, column);
                    break;
                }
            }
        }
    }

    pivots.len()
}

/// Count connected components of the 1-skeleton using union-find
pub fn count_components(n: usize, edges: &[(usize, usize)]) -> usize {
    let mut parent: Vec<usize> = (0..n).collect();
    let mut rank = vec![0usize; n];

    fn find(parent: &mut [usize], i: usize) -> usize {
        if parent[i] != i {
            parent[i] = find(parent, parent[i]);
        }
        parent[i]
    }

    let mut components = n;
    for &(i, j) in edges {
        let ri = find(&mut parent, i);
        let rj = find(&mut parent, j);
        if ri == rj {
            continue;
        }
        if rank[ri] < rank[rj] {
            parent[ri] = rj;
        } else if rank[ri] > rank[rj] {
            parent[rj] = ri;
        } else {
            parent[rj] = ri;
            rank[ri] += 1;
        }
        components -= 1;
    }

    components
}

/// Betti curve: sequence of Betti numbers across a radius sweep
#[derive(Debug, Clone, Serialize)]
pub struct BettiCurve {
    pub values: Vec<BettiNumbers>,
}

impl BettiCurve {
    /// Compute the full Betti curve of `points` over `sweep`
    pub fn compute(points: &[Point], sweep: &RadiusSweep) -> Result<Self, RipsError> {
        let values = sweep
            .complexes(points)?
            .iter()
            .map(BettiNumbers::of)
            .collect();

        Ok(Self { values })
    }

    /// Get β₀ curve
    pub fn beta_0_curve(&self) -> Vec<(f64, usize)> {
        self.values.iter().map(|b| (b.radius, b.beta_0)).collect()
    }

    /// Get β₂ curve
    pub fn beta_2_curve(&self) -> Vec<(f64, usize)> {
        self.values.iter().map(|b| (b.radius, b.beta_2)).collect()
    }

    /// Get β₁ curve
    pub fn beta_1_curve(&self) -> Vec<(f64, usize)> {
        self.values.iter().map(|b| (b.radius, b.beta_1)).collect()
    }

    /// Integrated β₁ (area under curve, trapezoid rule)
    pub fn integrated_beta_1(&self) -> f64 {
        self.values
            .windows(2)
            .map(|w| {
                let dr = w[1].radius - w[0].radius;
                dr * (w[0].beta_1 + w[1].beta_1) as f64 / 2.0
            })
            .sum()
    }
}
