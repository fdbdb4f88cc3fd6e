//! Configuration for the demo pipeline
//!
//! Coordinates are in unit-square units, matching the fixture cloud.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::topology::{RadiusScale, RadiusSweep};

/// Parameters of the generated demo cloud
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Points scattered uniformly over the interior
    pub n_scattered: usize,
    /// Number of elliptical clusters
    pub n_clusters: usize,
    /// Points on the boundary of each cluster
    pub points_per_cluster: usize,
    /// Horizontal semi-axis of a cluster
    pub cluster_radius: f64,
    /// Vertical / horizontal semi-axis ratio
    pub aspect: f64,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            n_scattered: 10,
            n_clusters: 4,
            points_per_cluster: 20,
            cluster_radius: 0.1,
            aspect: 1.5,
        }
    }
}

impl FixtureConfig {
    pub fn n_points(&self) -> usize {
        self.n_scattered + self.n_clusters * self.points_per_cluster
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RipsConfig {
    /// Ball radius for a single computation
    pub radius: f64,
    /// Lower end of the radius control / sweep
    pub min_radius: f64,
    /// Upper end of the radius control / sweep
    pub max_radius: f64,
    /// Number of sweep increments (0 sweeps the single radius `min_radius`)
    pub sweep_steps: usize,
    /// RNG seed for the demo cloud
    pub seed: u64,
    pub fixture: FixtureConfig,
}

impl Default for RipsConfig {
    fn default() -> Self {
        Self {
            radius: 0.05,
            min_radius: 0.01,
            max_radius: 0.1,
            sweep_steps: 20,
            seed: 12345,
            fixture: FixtureConfig::default(),
        }
    }
}

impl RipsConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("radius", self.radius),
            ("min_radius", self.min_radius),
            ("max_radius", self.max_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.min_radius > self.max_radius {
            return Err(ConfigError::Invalid(format!(
                "min_radius {} exceeds max_radius {}",
                self.min_radius, self.max_radius
            )));
        }
        Ok(())
    }

    pub fn radius_scale(&self) -> RadiusScale {
        RadiusScale::new(self.min_radius, self.max_radius)
    }

    pub fn sweep(&self) -> RadiusSweep {
        RadiusSweep::new(self.min_radius, self.max_radius, self.sweep_steps)
    }
}
