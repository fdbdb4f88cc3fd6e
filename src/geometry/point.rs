//! Point type and ndarray adapters

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::RipsError;

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Squared distance to another point
    pub fn distance_squared(&self, other: &Point) -> f64 {
        super::distance_squared(self.x, self.y, other.x, other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// Read an n x 2 coordinate matrix into points (row i becomes point i)
pub fn points_from_array(coords: &Array2<f64>) -> Result<Vec<Point>, RipsError> {
    let (rows, cols) = coords.dim();
    if cols != 2 {
        return Err(RipsError::BadShape { rows, cols });
    }

    Ok(coords
        .rows()
        .into_iter()
        .map(|row| Point::new(row[0], row[1]))
        .collect())
}

/// Pack points into an n x 2 coordinate matrix
pub fn points_to_array(points: &[Point]) -> Array2<f64> {
    let mut coords = Array2::<f64>::zeros((points.len(), 2));
    for (i, p) in points.iter().enumerate() {
        coords[[i, 0]] = p.x;
        coords[[i, 1]] = p.y;
    }
    coords
}
