use gridaura_types::SquareGridMode;

use super::square::generate_square_polygon;
use super::Point;

const GRID: f64 = 100.0;

#[test]
fn test_equidistant_is_expanded_rectangle() {
    let points = generate_square_polygon(2.0, GRID, SquareGridMode::Equidistant, 1.0, 1.0);
    assert_eq!(
        points,
        vec![
            Point::new(-200.0, -200.0),
            Point::new(300.0, -200.0),
            Point::new(300.0, 300.0),
            Point::new(-200.0, 300.0),
        ]
    );
}

#[test]
fn test_equidistant_respects_footprint() {
    let points = generate_square_polygon(1.0, GRID, SquareGridMode::Equidistant, 2.0, 3.0);
    assert_eq!(
        points,
        vec![
            Point::new(-100.0, -100.0),
            Point::new(300.0, -100.0),
            Point::new(300.0, 400.0),
            Point::new(-100.0, 400.0),
        ]
    );
}

#[test]
fn test_manhattan_radius_one_cuts_corners() {
    let points = generate_square_polygon(1.0, GRID, SquareGridMode::Manhattan, 1.0, 1.0);
    assert_eq!(
        points,
        vec![
            Point::new(0.0, -100.0),
            Point::new(100.0, -100.0),
            Point::new(100.0, 0.0),
            Point::new(200.0, 0.0),
            Point::new(200.0, 100.0),
            Point::new(100.0, 100.0),
            Point::new(100.0, 200.0),
            Point::new(0.0, 200.0),
            Point::new(0.0, 100.0),
            Point::new(-100.0, 100.0),
            Point::new(-100.0, 0.0),
            Point::new(0.0, 0.0),
        ]
    );
}

#[test]
fn test_manhattan_vertex_count_grows_with_radius() {
    // 4 side vertices plus 2 vertices per diagonal step per corner.
    for r in 0..5 {
        let points =
            generate_square_polygon(f64::from(r), GRID, SquareGridMode::Manhattan, 1.0, 1.0);
        assert_eq!(points.len(), (4 + 8 * r) as usize);
    }
}

#[test]
fn test_alternating_radius_one_is_square() {
    // At radius 1 every corner sequence is empty, leaving the one-cell
    // expanded square.
    let points = generate_square_polygon(1.0, GRID, SquareGridMode::Alternating, 1.0, 1.0);
    assert_eq!(
        points,
        vec![
            Point::new(-100.0, -100.0),
            Point::new(200.0, -100.0),
            Point::new(200.0, 200.0),
            Point::new(-100.0, 200.0),
        ]
    );
}

#[test]
fn test_alternating_radius_four_staircase() {
    let points = generate_square_polygon(4.0, GRID, SquareGridMode::Alternating, 1.0, 1.0);
    // One 2:1 step on each end of every corner, no 1:1 run.
    assert_eq!(points.len(), 20);
    assert_eq!(points[0], Point::new(-100.0, -400.0));
    assert_eq!(points[1], Point::new(200.0, -400.0));
    assert_eq!(points[2], Point::new(200.0, -300.0));
    assert_eq!(points[3], Point::new(400.0, -300.0));
    assert_eq!(points[4], Point::new(400.0, -100.0));
    assert_eq!(points[5], Point::new(500.0, -100.0));
}

#[test]
fn test_alternating_fractional_radius_rounds_steps_up() {
    // A 1.5-cell 1:1 run takes two steps, giving radius 2.5 the same vertex
    // count as radius 3.
    let fractional = generate_square_polygon(2.5, GRID, SquareGridMode::Alternating, 1.0, 1.0);
    let whole = generate_square_polygon(3.0, GRID, SquareGridMode::Alternating, 1.0, 1.0);
    assert_eq!(fractional.len(), 20);
    assert_eq!(fractional.len(), whole.len());
    assert_eq!(fractional[0], Point::new(-100.0, -250.0));
}

#[test]
fn test_radius_zero_is_footprint() {
    for &mode in &[
        SquareGridMode::Equidistant,
        SquareGridMode::Manhattan,
        SquareGridMode::Alternating,
    ] {
        let points = generate_square_polygon(0.0, GRID, mode, 1.0, 1.0);
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
                Point::new(0.0, 100.0),
            ],
            "mode {mode:?}"
        );
    }
}
