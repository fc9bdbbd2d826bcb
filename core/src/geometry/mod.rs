use nalgebra as na;

pub type Point2 = na::Point2<f64>;
pub type Vector2 = na::Vector2<f64>;

pub const EPSILON: f64 = 1e-9;

/// Buffer used by the tolerant range test. Coordinates arrive from upstream
/// scale/transform arithmetic, so boundary membership is decided within this
/// slack rather than exactly.
pub const RANGE_TOLERANCE: f64 = 0.1;

/// Coordinates are kept to 3 fractional digits; this is the scale factor
/// shared by rounding and the fixed-precision grid representation.
pub const COORD_SCALE: f64 = 1000.0;

pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() < EPSILON
    }
}

impl ApproxEq for Point2 {
    fn approx_eq(&self, other: &Self) -> bool {
        na::distance_squared(self, other) < EPSILON * EPSILON
    }
}

impl ApproxEq for Vector2 {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).norm_squared() < EPSILON * EPSILON
    }
}

/// Round a coordinate to 3 fractional digits. Collapses `-0.0` to `0.0` so
/// rounded coordinates compare and hash identically.
pub fn round_coord(v: f64) -> f64 {
    let r = (v * COORD_SCALE).round() / COORD_SCALE;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

pub fn round_point(p: &Point2) -> Point2 {
    Point2::new(round_coord(p.x), round_coord(p.y))
}

pub mod segment;
pub use segment::Segment;

pub mod rect;
pub use rect::Rect;

pub mod intersection;
pub use intersection::*;
