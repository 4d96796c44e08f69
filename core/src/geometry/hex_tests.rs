use super::hex::{edge_length, generate_hex_polygon, token_offset};
use super::GeometryError;

const GRID: f64 = 100.0;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}

#[test]
fn test_radius_zero_is_unit_hexagon() {
    let points = generate_hex_polygon(0.0, GRID, true, 1, false).unwrap();
    assert_eq!(points.len(), 6);
}

#[test]
fn test_radius_one_vertex_count() {
    // Two unit edges per side, each after the first preceded by a corner
    // turn, so 3 vertices per side.
    let points = generate_hex_polygon(1.0, GRID, true, 1, false).unwrap();
    assert_eq!(points.len(), 18);
}

#[test]
fn test_first_vertex_matches_token_offset() {
    let edge = edge_length(GRID);
    for &columns in &[true, false] {
        for center_size in 1..=4 {
            for &heavy in &[true, false] {
                let points =
                    generate_hex_polygon(2.0, GRID, columns, center_size, heavy).unwrap();
                let offset = token_offset(edge, GRID, columns, center_size, 2.0, heavy);
                assert_close(points[0].x, offset.x);
                assert_close(points[0].y, offset.y);
            }
        }
    }
}

#[test]
fn test_row_hex_bounding_box() {
    // A size-1 pointy-top hex spans one grid cell across and two edge
    // lengths top to bottom.
    let points = generate_hex_polygon(0.0, GRID, false, 1, false).unwrap();
    let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    assert_close(min_x, 0.0);
    assert_close(max_x, GRID);
    assert_close(min_y, 0.0);
    assert_close(max_y, 2.0 * edge_length(GRID));
}

#[test]
fn test_even_center_adds_extra_edges() {
    // Even-sized centres lengthen alternating sides by one unit edge.
    let points = generate_hex_polygon(0.0, GRID, true, 2, false).unwrap();
    assert_eq!(points.len(), 12);
}

#[test]
fn test_heavy_flips_even_center_shape() {
    let light = generate_hex_polygon(1.0, GRID, true, 2, false).unwrap();
    let heavy = generate_hex_polygon(1.0, GRID, true, 2, true).unwrap();
    assert_eq!(light.len(), heavy.len());
    assert_ne!(light, heavy);
}

#[test]
fn test_heavy_ignored_for_odd_center() {
    let a = generate_hex_polygon(1.0, GRID, false, 3, false).unwrap();
    let b = generate_hex_polygon(1.0, GRID, false, 3, true).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_non_integer_radius_rejected() {
    let err = generate_hex_polygon(1.5, GRID, true, 1, false).unwrap_err();
    assert!(matches!(err, GeometryError::NonIntegerRadius(_)));
}

#[test]
fn test_zero_center_size_rejected() {
    let err = generate_hex_polygon(1.0, GRID, true, 0, false).unwrap_err();
    assert!(matches!(err, GeometryError::InvalidCenterSize));
}

#[test]
fn test_generation_is_deterministic() {
    let a = generate_hex_polygon(3.0, GRID, false, 2, true).unwrap();
    let b = generate_hex_polygon(3.0, GRID, false, 2, true).unwrap();
    assert_eq!(a, b);
}
