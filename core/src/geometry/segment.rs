use super::Point2;
use serde::{Deserialize, Serialize};

/// A straight segment between two points.
///
/// Doubles as the representation of a cut line. Cut lines are expected to be
/// strictly horizontal or vertical; that is a caller contract, not a
/// constructor check (see `cut::validate_cut_lines` for the hardened entry).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Both endpoints share a y coordinate (exact comparison).
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    /// Both endpoints share an x coordinate (exact comparison).
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    pub fn is_axis_aligned(&self) -> bool {
        self.is_horizontal() || self.is_vertical()
    }
}
