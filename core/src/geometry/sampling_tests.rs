use super::hex::edge_length;
use super::sampling::{hex_points_under_token, square_points_under_token};
use super::Point;

const GRID: f64 = 100.0;

fn assert_points_close(actual: &[Point], expected: &[Point]) {
    assert_eq!(actual.len(), expected.len(), "point counts differ");
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            (a.x - e.x).abs() < 1e-9 && (a.y - e.y).abs() < 1e-9,
            "expected ({}, {}), got ({}, {})",
            e.x,
            e.y,
            a.x,
            a.y
        );
    }
}

#[test]
fn test_square_single_cell_center() {
    let points = square_points_under_token(GRID, 1.0, 1.0);
    assert_points_close(&points, &[Point::new(50.0, 50.0)]);
}

#[test]
fn test_square_multi_cell_footprint() {
    let points = square_points_under_token(GRID, 2.0, 3.0);
    assert_eq!(points.len(), 6);
    assert_points_close(&points[..2], &[Point::new(50.0, 50.0), Point::new(150.0, 50.0)]);
    assert_points_close(&points[5..], &[Point::new(150.0, 250.0)]);
}

#[test]
fn test_square_zero_footprint_still_samples_one_cell() {
    let points = square_points_under_token(GRID, 0.0, 0.0);
    assert_eq!(points.len(), 1);
}

#[test]
fn test_hex_single_cell_rows() {
    let e = edge_length(GRID);
    let points = hex_points_under_token(GRID, false, 1, false);
    assert_points_close(&points, &[Point::new(50.0, e)]);
}

#[test]
fn test_hex_single_cell_columns_swaps_axes() {
    let e = edge_length(GRID);
    let points = hex_points_under_token(GRID, true, 1, false);
    assert_points_close(&points, &[Point::new(e, 50.0)]);
}

#[test]
fn test_hex_size_two_heavy_rows() {
    // Heavy puts the short row on top: one cell, then the full two-cell
    // pivot row below it.
    let e = edge_length(GRID);
    let points = hex_points_under_token(GRID, false, 2, true);
    assert_points_close(
        &points,
        &[
            Point::new(100.0, e),
            Point::new(50.0, 2.5 * e),
            Point::new(150.0, 2.5 * e),
        ],
    );
}

#[test]
fn test_hex_size_two_light_rows() {
    let e = edge_length(GRID);
    let points = hex_points_under_token(GRID, false, 2, false);
    assert_points_close(
        &points,
        &[
            Point::new(50.0, e),
            Point::new(150.0, e),
            Point::new(100.0, 2.5 * e),
        ],
    );
}

#[test]
fn test_hex_size_three_cell_count() {
    // Rows of 2, 3, 2 cells.
    let points = hex_points_under_token(GRID, false, 3, false);
    assert_eq!(points.len(), 7);
}

#[test]
fn test_hex_size_zero_is_empty() {
    assert!(hex_points_under_token(GRID, false, 0, false).is_empty());
}
