//! Radius Control and Sweeps
//!
//! Growing r only ever adds simplices: if |pᵢ - pⱼ| ≤ 2r then also
//! |pᵢ - pⱼ| ≤ 2r' for every r' ≥ r. A sweep over increasing radii is
//! therefore a filtration VR_r₀ ⊆ VR_r₁ ⊆ … of nested complexes.

use tracing::trace;

use super::{compute_rips_complex, RipsComplex};
use crate::error::RipsError;
use crate::geometry::{linear_map, Point};

/// Maps a control position in [0, 1] onto a radius range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusScale {
    pub min_radius: f64,
    pub max_radius: f64,
}

impl RadiusScale {
    pub fn new(min_radius: f64, max_radius: f64) -> Self {
        Self {
            min_radius,
            max_radius,
        }
    }

    /// Radius at `percent` of the range; out-of-range positions are clamped
    pub fn radius_at(&self, percent: f64) -> f64 {
        let percent = percent.clamp(0.0, 1.0);
        linear_map(percent, 0.0, 1.0, self.min_radius, self.max_radius)
    }
}

/// Evenly spaced radii from `min_radius` to `max_radius`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusSweep {
    pub min_radius: f64,
    pub max_radius: f64,
    /// Number of increments; the sweep visits `n_steps + 1` radii
    pub n_steps: usize,
}

impl RadiusSweep {
    pub fn new(min_radius: f64, max_radius: f64, n_steps: usize) -> Self {
        Self {
            min_radius,
            max_radius,
            n_steps,
        }
    }

    /// Radius at a given step (steps past the end clamp to `max_radius`)
    pub fn radius_at(&self, step: usize) -> f64 {
        if self.n_steps == 0 {
            return self.min_radius;
        }
        let t = step.min(self.n_steps) as f64 / self.n_steps as f64;
        self.min_radius + (self.max_radius - self.min_radius) * t
    }

    /// All radii of the sweep in increasing order
    pub fn radii(&self) -> Vec<f64> {
        (0..=self.n_steps).map(|s| self.radius_at(s)).collect()
    }

    /// Check the range is ordered, so radii increase along the sweep
    pub fn validate(&self) -> Result<(), RipsError> {
        let (min, max) = (self.min_radius, self.max_radius);
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(RipsError::InvalidSweep { min, max });
        }
        Ok(())
    }

    /// Complex at every step of the sweep
    ///
    /// # Errors
    /// Rejects an inverted or non-finite range before computing anything.
    pub fn complexes(&self, points: &[Point]) -> Result<Vec<RipsComplex>, RipsError> {
        self.validate()?;
        self.radii()
            .into_iter()
            .enumerate()
            .map(|(step, radius)| {
                let complex = compute_rips_complex(points, radius)?;
                trace!(
                    step,
                    radius,
                    n_edges = complex.n_edges(),
                    n_triangles = complex.n_triangles(),
                    "sweep step"
                );
                Ok(complex)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_clamps() {
        let scale = RadiusScale::new(10.0, 100.0);
        assert_eq!(scale.radius_at(0.0), 10.0);
        assert_eq!(scale.radius_at(1.0), 100.0);
        assert_eq!(scale.radius_at(0.5), 55.0);
        assert_eq!(scale.radius_at(-3.0), 10.0);
        assert_eq!(scale.radius_at(7.0), 100.0);
    }

    #[test]
    fn test_sweep_radii() {
        let sweep = RadiusSweep::new(1.0, 2.0, 4);
        assert_eq!(sweep.radii(), vec![1.0, 1.25, 1.5, 1.75, 2.0]);
        assert_eq!(sweep.radius_at(99), 2.0);
        assert_eq!(RadiusSweep::new(0.3, 2.0, 0).radii(), vec![0.3]);
    }

    #[test]
    fn test_sweep_is_nested() {
        let points: Vec<Point> = (0..12)
            .map(|i| {
                let t = i as f64 * 0.7;
                Point::new(t.cos() * (1.0 + 0.1 * i as f64), t.sin())
            })
            .collect();

        let complexes = RadiusSweep::new(0.0, 1.5, 10).complexes(&points).unwrap();
        for w in complexes.windows(2) {
            assert!(w[0].edges.iter().all(|e| w[1].edges.contains(e)));
            assert!(w[0].triangles.iter().all(|t| w[1].triangles.contains(t)));
        }
    }

    #[test]
    fn test_sweep_rejects_negative() {
        let points = vec![Point::new(0.0, 0.0)];
        assert!(RadiusSweep::new(-1.0, 1.0, 2).complexes(&points).is_err());
    }

    #[test]
    fn test_sweep_rejects_inverted_range() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let sweep = RadiusSweep::new(2.0, 0.5, 3);

        assert_eq!(
            sweep.complexes(&points),
            Err(RipsError::InvalidSweep { min: 2.0, max: 0.5 })
        );
        assert!(RadiusSweep::new(0.5, 0.5, 3).complexes(&points).is_ok());
    }
}
