//! Distance and intersection predicates

/// Squared Euclidean distance between (ax, ay) and (bx, by)
#[inline]
pub fn distance_squared(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy
}

/// Do the closed balls B((ax, ay), r0) and B((bx, by), r1) intersect?
///
/// Touching balls intersect: two points at distance exactly r0 + r1
/// return `true`.
#[inline]
pub fn balls_intersect(ax: f64, ay: f64, r0: f64, bx: f64, by: f64, r1: f64) -> bool {
    let reach = r0 + r1;
    distance_squared(ax, ay, bx, by) <= reach * reach
}

/// Map `value` from [x0, x1] onto [y0, y1]
pub fn linear_map(value: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    (value - x0) / (x1 - x0) * (y1 - y0) + y0
}
