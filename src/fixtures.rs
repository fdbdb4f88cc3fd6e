//! Demo Point Clouds
//!
//! A cloud with structure at two scales, inside the unit square:
//! - a few points scattered uniformly over [0.13, 0.9]²
//! - several clusters, each a ring of points on the boundary of an
//!   axis-aligned ellipse with semi-axes (r, r·aspect)
//!
//! Small radii connect the rings into loops (β₁ > 0); larger radii fill
//! them in and merge everything into one component.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use std::f64::consts::PI;
use tracing::debug;

use crate::config::FixtureConfig;
use crate::error::ConfigError;
use crate::geometry::{linear_map, Point};

/// Generator for the clustered demo cloud
pub struct DemoCloud;

impl DemoCloud {
    /// Generate a cloud with the given RNG
    ///
    /// Scattered points come first, then each cluster's ring in turn.
    pub fn generate<R: Rng + ?Sized>(
        config: &FixtureConfig,
        rng: &mut R,
    ) -> Result<Vec<Point>, ConfigError> {
        let mut points = Vec::with_capacity(config.n_points());

        let scatter = Uniform::new_inclusive(0.13, 0.9)?;
        for _ in 0..config.n_scattered {
            points.push(Point::new(scatter.sample(rng), scatter.sample(rng)));
        }

        if config.n_clusters > 0 {
            let r = config.cluster_radius;
            let ry = r * config.aspect;
            let cx_dist = Uniform::new_inclusive(r, 1.0 - r)?;
            let cy_dist = Uniform::new_inclusive(0.05 + ry, 0.98 - ry)?;
            let angle = Uniform::new(0.0, 2.0 * PI)?;

            for _ in 0..config.n_clusters {
                let cx = cx_dist.sample(rng);
                let cy = cy_dist.sample(rng);

                for _ in 0..config.points_per_cluster {
                    let theta = angle.sample(rng);
                    points.push(Point::new(
                        linear_map(theta.cos(), -1.0, 1.0, cx - r, cx + r),
                        linear_map(theta.sin(), -1.0, 1.0, cy - ry, cy + ry),
                    ));
                }
            }
        }

        debug!(n_points = points.len(), "generated demo cloud");
        Ok(points)
    }

    /// Generate a reproducible cloud from a seed
    pub fn seeded(config: &FixtureConfig, seed: u64) -> Result<Vec<Point>, ConfigError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(config, &mut rng)
    }
}
