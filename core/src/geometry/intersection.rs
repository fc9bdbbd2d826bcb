//! 2D segment intersection for the cutting engine.

use super::{Point2, Segment, RANGE_TOLERANCE};

/// Tolerant range test: true if `value` lies between `b1` and `b2` (either
/// order) within `RANGE_TOLERANCE`.
pub fn between(value: f64, b1: f64, b2: f64) -> bool {
    between_within(value, b1, b2, RANGE_TOLERANCE)
}

/// Tolerant range test with an explicit buffer.
pub fn between_within(value: f64, b1: f64, b2: f64, tolerance: f64) -> bool {
    let (lo, hi) = if b1 <= b2 { (b1, b2) } else { (b2, b1) };
    value >= lo - tolerance && value <= hi + tolerance
}

/// Calculate the intersection point of two segments.
///
/// Uses the 2x2 determinant form for the intersection of the infinite lines
/// through the endpoints. A zero determinant means parallel (including
/// collinear; overlapping collinear segments are not treated as a shared
/// edge). The point is accepted only if it lies within the tolerant range of
/// both segments on both axes.
pub fn segment_intersection(a: &Segment, b: &Segment) -> Option<Point2> {
    let (x1, y1) = (a.start.x, a.start.y);
    let (x2, y2) = (a.end.x, a.end.y);
    let (x3, y3) = (b.start.x, b.start.y);
    let (x4, y4) = (b.end.x, b.end.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom == 0.0 {
        return None;
    }

    let x_num = (x1 * y2 - y1 * x2) * (x3 - x4) - (x1 - x2) * (x3 * y4 - y3 * x4);
    let y_num = (x1 * y2 - y1 * x2) * (y3 - y4) - (y1 - y2) * (x3 * y4 - y3 * x4);

    // -0.0 would survive into equality-keyed point matching downstream.
    let x = scrub_negative_zero(x_num / denom);
    let y = scrub_negative_zero(y_num / denom);

    if between(x, x1, x2) && between(y, y1, y2) && between(x, x3, x4) && between(y, y3, y4) {
        Some(Point2::new(x, y))
    } else {
        None
    }
}

fn scrub_negative_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}
