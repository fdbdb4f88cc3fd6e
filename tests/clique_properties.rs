//! Property tests for the Rips complex over random point clouds.

use std::collections::HashSet;

use proptest::prelude::*;
use rips_skeleton::{compute_rips_complex, DemoCloud, FixtureConfig, Point};

fn cloud() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-5.0f64..5.0, -5.0f64..5.0), 0..40)
        .prop_map(|coords| coords.into_iter().map(Point::from).collect())
}

/// Points on a coarse grid, so many pairs sit exactly at distance 2r
fn lattice_cloud() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0i32..6, 0i32..6), 0..30).prop_map(|coords| {
        coords
            .into_iter()
            .map(|(x, y)| Point::new(x as f64, y as f64))
            .collect()
    })
}

fn is_edge(points: &[Point], radius: f64, i: usize, j: usize) -> bool {
    let reach = 2.0 * radius;
    points[i].distance_squared(&points[j]) <= reach * reach
}

proptest! {
    #[test]
    fn clique_condition(points in cloud(), radius in 0.0f64..3.0) {
        let complex = compute_rips_complex(&points, radius).unwrap();
        let edges: HashSet<_> = complex.edges.iter().copied().collect();
        let triangles: HashSet<_> = complex.triangles.iter().copied().collect();
        let n = points.len();

        for i in 0..n {
            for j in i + 1..n {
                prop_assert_eq!(edges.contains(&(i, j)), is_edge(&points, radius, i, j));
                for k in j + 1..n {
                    let clique = edges.contains(&(i, j))
                        && edges.contains(&(i, k))
                        && edges.contains(&(j, k));
                    prop_assert_eq!(triangles.contains(&(i, j, k)), clique);
                }
            }
        }
    }

    #[test]
    fn clique_condition_on_boundary(points in lattice_cloud(), radius in prop::sample::select(vec![0.0, 0.5, 1.0, 1.5, 2.5])) {
        let complex = compute_rips_complex(&points, radius).unwrap();
        let edges: HashSet<_> = complex.edges.iter().copied().collect();

        for &(i, j, k) in &complex.triangles {
            prop_assert!(edges.contains(&(i, j)) && edges.contains(&(i, k)) && edges.contains(&(j, k)));
        }
        for &(i, j) in &complex.edges {
            prop_assert!(is_edge(&points, radius, i, j));
        }
    }

    #[test]
    fn no_duplicates_and_valid_indices(points in cloud(), radius in 0.0f64..3.0) {
        let complex = compute_rips_complex(&points, radius).unwrap();
        let n = points.len();

        let edges: HashSet<_> = complex.edges.iter().collect();
        prop_assert_eq!(edges.len(), complex.edges.len());
        for &(i, j) in &complex.edges {
            prop_assert!(i < j && j < n);
        }

        let triangles: HashSet<_> = complex.triangles.iter().collect();
        prop_assert_eq!(triangles.len(), complex.triangles.len());
        for &(i, j, k) in &complex.triangles {
            prop_assert!(i < j && j < k && k < n);
        }
    }

    #[test]
    fn edges_in_nested_loop_order(points in cloud(), radius in 0.0f64..3.0) {
        let complex = compute_rips_complex(&points, radius).unwrap();
        prop_assert!(complex.edges.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn deterministic(points in cloud(), radius in 0.0f64..3.0) {
        let a = compute_rips_complex(&points, radius).unwrap();
        let b = compute_rips_complex(&points, radius).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn monotone_in_radius(points in cloud(), r0 in 0.0f64..2.0, dr in 0.0f64..2.0) {
        let small = compute_rips_complex(&points, r0).unwrap();
        let large = compute_rips_complex(&points, r0 + dr).unwrap();

        let large_edges: HashSet<_> = large.edges.iter().collect();
        let large_triangles: HashSet<_> = large.triangles.iter().collect();
        prop_assert!(small.edges.iter().all(|e| large_edges.contains(e)));
        prop_assert!(small.triangles.iter().all(|t| large_triangles.contains(t)));
    }
}

#[test]
fn demo_cloud_complex() {
    let points = DemoCloud::seeded(&FixtureConfig::default(), 2024).unwrap();

    let empty = compute_rips_complex(&points, 0.0).unwrap();
    assert!(empty.edges.is_empty());

    // Everything lies in the unit square, so reach √2 connects all pairs
    let full = compute_rips_complex(&points, 0.75).unwrap();
    let n = points.len();
    assert_eq!(full.n_edges(), n * (n - 1) / 2);
    assert_eq!(full.n_triangles(), n * (n - 1) * (n - 2) / 6);
}
