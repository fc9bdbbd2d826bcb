//! Block layout: identified rectangles and cut application.
//!
//! The engine itself is pure value-in/value-out; this layer adds the small
//! amount of structure an interactive caller works with: identified
//! blocks, blade positions, and the explicit [`apply_cut`] call that
//! replaces cut blocks with their cells. Interactive state (drag, pan/zoom,
//! pending blade edits) stays with the caller; by convention it clears its
//! blade positions after a successful cut.

use crate::cut::{cut_outcome, validate_cut_lines, CutError, CutOutcome};
use crate::geometry::{segment_intersection, Point2, Rect, Segment};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// A stable identifier for a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub Uuid);

impl BlockId {
    /// Generate a new random BlockId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ID from a specific UUID (useful for restoration).
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create a deterministic ID based on a string seed (e.g. "B12_3").
    pub fn new_deterministic(seed: &str) -> Self {
        let uuid = Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes());
        Self(uuid)
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An identified rectangular block in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub bounds: Rect,
}

impl Block {
    /// A block with a fresh random id.
    pub fn new(bounds: Rect) -> Self {
        Self {
            id: BlockId::new(),
            bounds,
        }
    }

    pub fn with_id(id: BlockId, bounds: Rect) -> Self {
        Self { id, bounds }
    }
}

/// Blade coordinates: each horizontal blade is a y coordinate, each
/// vertical blade an x coordinate. Blades are materialized into full cut
/// lines spanning a bounds rectangle before cutting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BladePositions {
    pub horizontal: Vec<f64>,
    pub vertical: Vec<f64>,
}

impl BladePositions {
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty() && self.vertical.is_empty()
    }

    pub fn clear(&mut self) {
        self.horizontal.clear();
        self.vertical.clear();
    }

    /// Materialize cut lines across `bounds`: horizontal blades first, then
    /// vertical, each spanning the full extent of the bounds.
    pub fn cut_lines(&self, bounds: &Rect) -> Vec<Segment> {
        let mut lines = Vec::with_capacity(self.horizontal.len() + self.vertical.len());
        for &y in &self.horizontal {
            lines.push(Segment::new(
                Point2::new(bounds.a.x, y),
                Point2::new(bounds.b.x, y),
            ));
        }
        for &x in &self.vertical {
            lines.push(Segment::new(
                Point2::new(x, bounds.a.y),
                Point2::new(x, bounds.b.y),
            ));
        }
        lines
    }
}

/// Cut every block independently against one set of lines.
///
/// Blocks the lines partition are replaced by freshly-identified child
/// blocks; blocks no line touches (and grazing cuts that close no cells)
/// are kept as they are, id included. Lines are validated up front, so a
/// slanted line rejects the whole call without touching any block.
pub fn apply_cut(blocks: &[Block], lines: &[Segment]) -> Result<Vec<Block>, CutError> {
    validate_cut_lines(lines)?;

    let mut next = Vec::with_capacity(blocks.len());
    for block in blocks {
        match cut_outcome(&block.bounds, lines) {
            CutOutcome::Cut(cells) if !cells.is_empty() => {
                debug!(block = %block.id, cells = cells.len(), "block split");
                next.extend(cells.into_iter().map(Block::new));
            }
            _ => next.push(*block),
        }
    }

    debug!(
        blocks_in = blocks.len(),
        blocks_out = next.len(),
        lines = lines.len(),
        "cut applied"
    );
    Ok(next)
}

/// Crossing points of cut lines with each other and with block edges,
/// suitable for rendering as markers while blades are being positioned.
pub fn crossing_markers(lines: &[Segment], blocks: &[Block]) -> Vec<Point2> {
    let mut targets: Vec<Segment> = lines.to_vec();
    targets.extend(blocks.iter().flat_map(|b| b.bounds.edges()));

    let mut markers = Vec::new();
    for line in lines {
        for target in &targets {
            if let Some(p) = segment_intersection(line, target) {
                markers.push(p);
            }
        }
    }
    markers
}
