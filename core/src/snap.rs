//! Corner snapping for dragged blocks.
//!
//! A dragged block snaps when one of its corners comes within a buffer of a
//! candidate point (typically the corners of the other blocks). This is a
//! plain nearest-point matcher over already-scaled coordinates; it performs
//! no reconstruction and owns no interaction state.

use crate::geometry::{Point2, Rect, Vector2};
use crate::layout::Block;
use serde::{Deserialize, Serialize};

/// Configuration for snap detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Per-axis distance (in layout units) within which a corner snaps.
    pub buffer: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self { buffer: 5.0 }
    }
}

/// Result of matching a block against a set of snap points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapResult {
    /// Candidate points that matched a corner, for highlighting.
    pub matched: Vec<Point2>,
    /// Block origins that would land the matching corner exactly on its
    /// candidate, parallel to `matched`.
    pub origins: Vec<Point2>,
}

impl SnapResult {
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }
}

/// Per-axis range check between a block corner and a candidate point.
/// Both axes must be within `buffer` (strictly), so the match region is a
/// square around the candidate rather than a disc.
pub fn corner_in_range(buffer: f64, corner: &Point2, candidate: &Point2) -> bool {
    (candidate.x - corner.x).abs() < buffer && (candidate.y - corner.y).abs() < buffer
}

/// Match all four corners of `bounds` against `snap_points`.
///
/// Corners are tried in a fixed order (top-left, top-right, bottom-left,
/// bottom-right of the normalized bounds); for each match the block origin
/// is offset so that the matching corner, not the origin, lands on the
/// candidate point.
pub fn snap_block(bounds: &Rect, snap_points: &[Point2], config: &SnapConfig) -> SnapResult {
    let w = bounds.width();
    let h = bounds.height();
    let origin = Point2::new(bounds.min_x(), bounds.min_y());

    let corners = [
        (origin, Vector2::new(0.0, 0.0)),
        (origin + Vector2::new(w, 0.0), Vector2::new(w, 0.0)),
        (origin + Vector2::new(0.0, h), Vector2::new(0.0, h)),
        (origin + Vector2::new(w, h), Vector2::new(w, h)),
    ];

    let mut result = SnapResult::default();
    for (corner, offset) in corners {
        for p in snap_points {
            if corner_in_range(config.buffer, &corner, p) {
                result.matched.push(*p);
                result.origins.push(*p - offset);
            }
        }
    }
    result
}

/// Every corner of every block: the usual candidate set for [`snap_block`].
pub fn block_snap_points(blocks: &[Block]) -> Vec<Point2> {
    blocks.iter().flat_map(|b| b.bounds.corners()).collect()
}

/// Snap a coordinate to the nearest multiple of `spacing`.
pub fn snap_to_grid(value: f64, spacing: f64) -> f64 {
    (value / spacing).round() * spacing
}
