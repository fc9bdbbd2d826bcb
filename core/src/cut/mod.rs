//! Rectangle partitioning by axis-aligned cut lines.
//!
//! Given a rectangle and a set of horizontal/vertical cut lines, computes
//! the sub-rectangles the lines partition it into. Handles lines that cross
//! each other inside the rectangle and lines that only partially traverse
//! it. All arithmetic is normalized onto a fixed-precision grid before
//! cells are reconstructed, so intersection coordinates that are
//! mathematically identical actually compare equal.

pub mod grid;

#[cfg(test)]
mod tests_cutting;

use crate::geometry::{segment_intersection, Point2, Rect, Segment};
use grid::{trace_cells, GridPoint};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::trace;

/// Errors from the validating cut entry points.
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
pub enum CutError {
    #[error("Cut line is not axis-aligned: {0}")]
    SlantedCutLine(String),
}

/// Outcome of cutting one rectangle, distinguishing "no line touched the
/// rectangle" from a partition that happened to close zero cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CutOutcome {
    /// No cut line intersects the rectangle boundary; the input is
    /// untouched and should be kept by the caller.
    NotCut,
    /// At least one line touched the rectangle; carries the resulting
    /// cells (possibly empty for grazing cuts that close no cell).
    Cut(Vec<Rect>),
}

/// Check that every cut line is strictly horizontal or vertical.
pub fn validate_cut_lines(lines: &[Segment]) -> Result<(), CutError> {
    for line in lines {
        if !line.is_axis_aligned() {
            return Err(CutError::SlantedCutLine(format!(
                "({}, {}) -> ({}, {})",
                line.start.x, line.start.y, line.end.x, line.end.y
            )));
        }
    }
    Ok(())
}

/// Cut a rectangle with a set of axis-aligned lines, returning the
/// sub-rectangles in the row-major order of the reconstruction walk.
///
/// Returns an empty vec when no line touches the rectangle at all; the
/// rectangle is then untouched, not returned as itself. Use [`cut_outcome`]
/// when that case must be told apart from a cut that closed no cells.
pub fn cut_rect_with_lines(rect: &Rect, lines: &[Segment]) -> Vec<Rect> {
    let boundary_hits: Vec<Point2> = lines
        .iter()
        .flat_map(|line| rect.intersect_segment(line))
        .collect();

    if boundary_hits.is_empty() {
        return Vec::new();
    }

    // Crossings of cut lines with each other, restricted to this rectangle.
    let mut inner_crossings = Vec::new();
    for i in 0..lines.len() {
        for j in (i + 1)..lines.len() {
            if let Some(p) = segment_intersection(&lines[i], &lines[j]) {
                if rect.contains_point(&p) {
                    inner_crossings.push(p);
                }
            }
        }
    }

    // Candidate set: corners, boundary hits, inner crossings. Rounded onto
    // the grid, first occurrence kept.
    let mut candidates: Vec<GridPoint> = Vec::new();
    let mut seen: HashSet<GridPoint> = HashSet::new();
    for p in rect
        .corners()
        .iter()
        .chain(boundary_hits.iter())
        .chain(inner_crossings.iter())
    {
        let gp = GridPoint::from_point(p);
        if seen.insert(gp) {
            candidates.push(gp);
        }
    }

    trace!(
        boundary_hits = boundary_hits.len(),
        inner_crossings = inner_crossings.len(),
        candidates = candidates.len(),
        "collected candidate points"
    );

    let start = GridPoint::from_point(&rect.a);
    trace_cells(start, &candidates)
        .into_iter()
        .map(|(top_left, bottom_right)| Rect::new(top_left.to_point(), bottom_right.to_point()))
        .collect()
}

/// Cut a rectangle and report whether any line touched it at all.
pub fn cut_outcome(rect: &Rect, lines: &[Segment]) -> CutOutcome {
    let touched = lines
        .iter()
        .any(|line| !rect.intersect_segment(line).is_empty());
    if !touched {
        return CutOutcome::NotCut;
    }
    CutOutcome::Cut(cut_rect_with_lines(rect, lines))
}
