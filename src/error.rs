//! Error types
//!
//! Building a complex cannot fail once its inputs are valid, so the only
//! library-level failures are precondition violations caught before any
//! work is done, plus configuration problems on the demo side.

use thiserror::Error;

/// Rejected input to a complex computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RipsError {
    /// A point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },

    /// Radius is negative, NaN or infinite.
    #[error("ball radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),

    /// Sweep range runs backwards or has a non-finite end.
    #[error("sweep range must satisfy 0 <= min <= max, got [{min}, {max}]")]
    InvalidSweep { min: f64, max: f64 },

    /// Array input is not an n x 2 matrix of coordinates.
    #[error("expected an n x 2 coordinate array, got {rows} x {cols}")]
    BadShape { rows: usize, cols: usize },
}

/// Failure loading or applying a [`RipsConfig`](crate::RipsConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),

    /// A fixture parameter produced an empty sampling range.
    #[error("invalid sampling range: {0}")]
    Sampling(#[from] rand::distr::uniform::Error),
}
