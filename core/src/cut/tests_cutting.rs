use super::{cut_outcome, cut_rect_with_lines, validate_cut_lines, CutError, CutOutcome};
use crate::geometry::{Rect, Segment};

#[test]
fn test_no_cut_lines_yields_nothing() {
    let rect = Rect::from_coords(0.0, 0.0, 10.0, 10.0);
    assert!(cut_rect_with_lines(&rect, &[]).is_empty());
    assert_eq!(cut_outcome(&rect, &[]), CutOutcome::NotCut);
}

#[test]
fn test_line_missing_the_rect_yields_nothing() {
    let rect = Rect::from_coords(0.0, 0.0, 10.0, 10.0);
    let far_away = [Segment::from_coords(50.0, -100.0, 50.0, 100.0)];
    assert!(cut_rect_with_lines(&rect, &far_away).is_empty());
    assert_eq!(cut_outcome(&rect, &far_away), CutOutcome::NotCut);
}

#[test]
fn test_single_vertical_cut_left_cell_first() {
    let rect = Rect::from_coords(0.0, 0.0, 10.0, 10.0);
    let lines = [Segment::from_coords(5.0, 0.0, 5.0, 10.0)];

    let cells = cut_rect_with_lines(&rect, &lines);

    assert_eq!(
        cells,
        vec![
            Rect::from_coords(0.0, 0.0, 5.0, 10.0),
            Rect::from_coords(5.0, 0.0, 10.0, 10.0),
        ]
    );
}

#[test]
fn test_single_horizontal_cut_top_cell_first() {
    let rect = Rect::from_coords(0.0, 0.0, 10.0, 10.0);
    let lines = [Segment::from_coords(0.0, 4.0, 10.0, 4.0)];

    let cells = cut_rect_with_lines(&rect, &lines);

    assert_eq!(
        cells,
        vec![
            Rect::from_coords(0.0, 0.0, 10.0, 4.0),
            Rect::from_coords(0.0, 4.0, 10.0, 10.0),
        ]
    );
}

#[test]
fn test_cut_coordinates_are_rounded_onto_the_grid() {
    // Coordinates carry slop from an upstream scale transform; the cut must
    // land exactly on x = 1868 and the corners on 3-decimal values.
    let rect = Rect::from_coords(1814.0206185567013, 373.8144329896907, 1920.0, 494.639175257732);
    let lines = [Segment::from_coords(1868.0, 290.7113402061856, 1868.0, 542.9613402061856)];

    let cells = cut_rect_with_lines(&rect, &lines);

    assert_eq!(
        cells,
        vec![
            Rect::from_coords(1814.021, 373.814, 1868.0, 494.639),
            Rect::from_coords(1868.0, 373.814, 1920.0, 494.639),
        ]
    );
}

#[test]
fn test_crossing_cuts_make_four_cells() {
    let rect = Rect::from_coords(0.0, 0.0, 10.0, 10.0);
    let lines = [
        Segment::from_coords(4.0, -1.0, 4.0, 11.0),
        Segment::from_coords(-1.0, 6.0, 11.0, 6.0),
    ];

    let cells = cut_rect_with_lines(&rect, &lines);

    assert_eq!(
        cells,
        vec![
            Rect::from_coords(0.0, 0.0, 4.0, 6.0),
            Rect::from_coords(4.0, 0.0, 10.0, 6.0),
            Rect::from_coords(4.0, 6.0, 10.0, 10.0),
            Rect::from_coords(0.0, 6.0, 4.0, 10.0),
        ]
    );
}

#[test]
fn test_two_parallel_cuts_make_three_cells() {
    let rect = Rect::from_coords(0.0, 0.0, 12.0, 6.0);
    let lines = [
        Segment::from_coords(4.0, -1.0, 4.0, 7.0),
        Segment::from_coords(8.0, -1.0, 8.0, 7.0),
    ];

    let cells = cut_rect_with_lines(&rect, &lines);

    assert_eq!(
        cells,
        vec![
            Rect::from_coords(0.0, 0.0, 4.0, 6.0),
            Rect::from_coords(4.0, 0.0, 8.0, 6.0),
            Rect::from_coords(8.0, 0.0, 12.0, 6.0),
        ]
    );
}

#[test]
fn test_partial_cut_terminating_inside() {
    // The line enters through the top edge but stops mid-rectangle. Only
    // the boundary entry point joins the candidate set, so the walk closes
    // the cell to the right of the blade and nothing else.
    let rect = Rect::from_coords(0.0, 0.0, 10.0, 10.0);
    let lines = [Segment::from_coords(5.0, 0.0, 5.0, 5.0)];

    let cells = cut_rect_with_lines(&rect, &lines);

    assert_eq!(cells, vec![Rect::from_coords(5.0, 0.0, 10.0, 10.0)]);
}

#[test]
fn test_degenerate_rect_is_never_cut() {
    let rect = Rect::from_coords(3.0, 3.0, 3.0, 3.0);
    let lines = [Segment::from_coords(3.0, -10.0, 3.0, 10.0)];
    assert!(cut_rect_with_lines(&rect, &lines).is_empty());
    assert_eq!(cut_outcome(&rect, &lines), CutOutcome::NotCut);
}

#[test]
fn test_cutting_is_idempotent() {
    let rect = Rect::from_coords(0.0, 0.0, 10.0, 10.0);
    let lines = [
        Segment::from_coords(4.0, -1.0, 4.0, 11.0),
        Segment::from_coords(-1.0, 6.0, 11.0, 6.0),
    ];

    let first = cut_rect_with_lines(&rect, &lines);
    let second = cut_rect_with_lines(&rect, &lines);
    assert_eq!(first, second);
}

#[test]
fn test_reversed_corner_order_closes_no_cells() {
    // Range tests are order-independent, but the walk always starts at the
    // first defining corner and moves rightward/downward. With the diagonal
    // given bottom-right-first there is nothing in either direction, so the
    // cut is detected (lines do touch) yet closes no cells.
    let rect = Rect::from_coords(10.0, 10.0, 0.0, 0.0);
    let lines = [Segment::from_coords(5.0, 10.0, 5.0, 0.0)];

    assert!(cut_rect_with_lines(&rect, &lines).is_empty());
    assert_eq!(cut_outcome(&rect, &lines), CutOutcome::Cut(Vec::new()));
}

#[test]
fn test_validate_cut_lines() {
    let good = [
        Segment::from_coords(0.0, 1.0, 9.0, 1.0),
        Segment::from_coords(2.0, 0.0, 2.0, 9.0),
    ];
    assert!(validate_cut_lines(&good).is_ok());

    let bad = [Segment::from_coords(0.0, 0.0, 9.0, 1.0)];
    assert!(matches!(
        validate_cut_lines(&bad),
        Err(CutError::SlantedCutLine(_))
    ));
}

#[test]
fn test_outcome_distinguishes_touch_from_miss() {
    let rect = Rect::from_coords(0.0, 0.0, 10.0, 10.0);

    let crossing = [Segment::from_coords(5.0, -1.0, 5.0, 11.0)];
    match cut_outcome(&rect, &crossing) {
        CutOutcome::Cut(cells) => assert_eq!(cells.len(), 2),
        CutOutcome::NotCut => panic!("line crosses the rectangle"),
    }

    let miss = [Segment::from_coords(50.0, -1.0, 50.0, 11.0)];
    assert_eq!(cut_outcome(&rect, &miss), CutOutcome::NotCut);
}

#[test]
fn test_independent_rects_against_one_line_set() {
    // Two rectangles cut against the same lines: each is partitioned on its
    // own, with crossings outside a rectangle ignored for it.
    let left = Rect::from_coords(0.0, 0.0, 10.0, 10.0);
    let right = Rect::from_coords(20.0, 0.0, 30.0, 10.0);
    let lines = [
        Segment::from_coords(5.0, -1.0, 5.0, 11.0),
        Segment::from_coords(25.0, -1.0, 25.0, 11.0),
    ];

    let left_cells = cut_rect_with_lines(&left, &lines);
    let right_cells = cut_rect_with_lines(&right, &lines);

    assert_eq!(
        left_cells,
        vec![
            Rect::from_coords(0.0, 0.0, 5.0, 10.0),
            Rect::from_coords(5.0, 0.0, 10.0, 10.0),
        ]
    );
    assert_eq!(
        right_cells,
        vec![
            Rect::from_coords(20.0, 0.0, 25.0, 10.0),
            Rect::from_coords(25.0, 0.0, 30.0, 10.0),
        ]
    );
}

#[test]
fn test_point_from_line_crossing_is_matched_by_row_and_column() {
    // The crossing of the two lines sits strictly inside and must line up
    // exactly with the boundary hits after rounding, otherwise the four
    // cells cannot close.
    let rect = Rect::from_coords(0.0, 0.0, 9.0, 9.0);
    let lines = [
        Segment::from_coords(3.0000001, -1.0, 3.0000001, 10.0),
        Segment::from_coords(-1.0, 5.9999999, 10.0, 5.9999999),
    ];

    let cells = cut_rect_with_lines(&rect, &lines);
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[0], Rect::from_coords(0.0, 0.0, 3.0, 6.0));
}
