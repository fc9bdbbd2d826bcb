use super::{between, segment_intersection, Point2, Segment};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by two opposite corners.
///
/// No orientation is assumed: `a` and `b` may be any diagonal pair, and all
/// range tests are order-independent. Degenerate rectangles (zero width or
/// height) are legal values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub a: Point2,
    pub b: Point2,
}

impl Rect {
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    pub fn from_origin_size(origin: Point2, width: f64, height: f64) -> Self {
        Self::new(origin, Point2::new(origin.x + width, origin.y + height))
    }

    pub fn min_x(&self) -> f64 {
        self.a.x.min(self.b.x)
    }

    pub fn max_x(&self) -> f64 {
        self.a.x.max(self.b.x)
    }

    pub fn min_y(&self) -> f64 {
        self.a.y.min(self.b.y)
    }

    pub fn max_y(&self) -> f64 {
        self.a.y.max(self.b.y)
    }

    pub fn width(&self) -> f64 {
        self.max_x() - self.min_x()
    }

    pub fn height(&self) -> f64 {
        self.max_y() - self.min_y()
    }

    /// The four corners, in fixed order: `a`, the corner sharing `a`'s row,
    /// `b`, the corner sharing `a`'s column.
    pub fn corners(&self) -> [Point2; 4] {
        [
            self.a,
            Point2::new(self.b.x, self.a.y),
            self.b,
            Point2::new(self.a.x, self.b.y),
        ]
    }

    /// The four boundary edges, connecting consecutive corners and closing
    /// the loop back to `a`.
    pub fn edges(&self) -> [Segment; 4] {
        let [c0, c1, c2, c3] = self.corners();
        [
            Segment::new(c0, c1),
            Segment::new(c1, c2),
            Segment::new(c2, c3),
            Segment::new(c3, c0),
        ]
    }

    /// Tolerant containment test on both axes.
    pub fn contains_point(&self, p: &Point2) -> bool {
        between(p.x, self.a.x, self.b.x) && between(p.y, self.a.y, self.b.y)
    }

    /// Intersect a segment against all four edges, keeping defined results.
    ///
    /// Yields 0, 1, or 2 points in edge order: 2 when the segment passes
    /// through, 1 when it enters but terminates inside, 0 when it misses.
    /// A degenerate rectangle has only degenerate edges and yields nothing.
    pub fn intersect_segment(&self, line: &Segment) -> Vec<Point2> {
        self.edges()
            .iter()
            .filter_map(|edge| segment_intersection(line, edge))
            .collect()
    }
}
