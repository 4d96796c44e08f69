//! Square aura polygon generation.
//!
//! Three boundary-shape policies exist for square grids: a plain expanded
//! rectangle (Chebyshev distance), diamond-cut corners (Manhattan distance),
//! and a staircase approximation of a circle. Coordinates use the same
//! convention as the hex generator: the origin is the top-left of the
//! token's bounding box.

use gridaura_types::SquareGridMode;

use super::Point;

/// Generates a square aura polygon for the given radius.
///
/// * `radius` - aura radius in grid cells; must be non-negative.
/// * `width`/`height` - token footprint in grid cells.
pub fn generate_square_polygon(
    radius: f64,
    grid_size: f64,
    mode: SquareGridMode,
    width: f64,
    height: f64,
) -> Vec<Point> {
    let s = grid_size;
    let r = radius;
    let w = width;
    let h = height;

    match mode {
        // A large rectangle around the centre.
        SquareGridMode::Equidistant => vec![
            Point::new(-r * s, -r * s),
            Point::new((w + r) * s, -r * s),
            Point::new((w + r) * s, (h + r) * s),
            Point::new(-r * s, (h + r) * s),
        ],

        // Top/bottom/left/right sides the same as the footprint, joined by
        // 45-degree staircase diagonals of length `radius`.
        SquareGridMode::Manhattan => {
            let steps = r.ceil() as i64;
            let mut points = Vec::new();

            points.push(Point::new(0.0, -r * s));
            let mut cur = (w, -r);
            diagonal(&mut points, s, &mut cur, steps, (0.0, 1.0), (1.0, 0.0));
            points.push(Point::new((w + r) * s, 0.0));
            cur = (w + r, h);
            diagonal(&mut points, s, &mut cur, steps, (-1.0, 0.0), (0.0, 1.0));
            points.push(Point::new(w * s, (h + r) * s));
            cur = (0.0, h + r);
            diagonal(&mut points, s, &mut cur, steps, (0.0, -1.0), (-1.0, 0.0));
            points.push(Point::new(-r * s, h * s));
            cur = (-r, 0.0);
            diagonal(&mut points, s, &mut cur, steps, (1.0, 0.0), (0.0, -1.0));

            points
        }

        // Each corner becomes three slopes in sequence: 2:1, 1:1, 2:1. The
        // 1:1 part is `(r-1) mod 3` squares long and each 2:1 part is
        // `(r-1) div 3` squares long.
        SquareGridMode::Alternating => {
            // All radii except 0 have the straight sides extend one square
            // beyond the footprint.
            let p = if r > 0.0 { 1.0 } else { 0.0 };
            // Fractional run lengths still take a whole step, so counts
            // round up.
            let rm1 = r - 1.0;
            let inner = (rm1 % 3.0).ceil().max(0.0) as i64;
            let outer = (rm1 / 3.0).floor().max(0.0) as i64;

            let mut points = Vec::new();

            points.push(Point::new(-p * s, -r * s));
            staircase(&mut points, s, (w + p, -r), true, 1.0, 1.0, inner, outer);
            points.push(Point::new((w + r) * s, -p * s));
            staircase(&mut points, s, (w + r, h + p), false, -1.0, 1.0, inner, outer);
            points.push(Point::new((w + p) * s, (h + r) * s));
            staircase(&mut points, s, (-p, h + r), true, -1.0, -1.0, inner, outer);
            points.push(Point::new(-r * s, (h + p) * s));
            staircase(&mut points, s, (-r, -p), false, 1.0, -1.0, inner, outer);

            points
        }
    }
}

/// Emits `count` staircase steps from the cursor, alternating `step0` and
/// `step1` (in grid cells), pushing the vertex before each move.
fn diagonal(
    points: &mut Vec<Point>,
    s: f64,
    cur: &mut (f64, f64),
    count: i64,
    step0: (f64, f64),
    step1: (f64, f64),
) {
    for _ in 0..count {
        points.push(Point::new(cur.0 * s, cur.1 * s));
        cur.0 += step0.0;
        cur.1 += step0.1;
        points.push(Point::new(cur.0 * s, cur.1 * s));
        cur.0 += step1.0;
        cur.1 += step1.1;
    }
}

/// One alternating-mode corner: the 2:1, 1:1, 2:1 slope sequence starting at
/// `start`. `along_x` selects which axis the long runs stretch on; `dx`/`dy`
/// give the travel direction around the polygon.
fn staircase(
    points: &mut Vec<Point>,
    s: f64,
    start: (f64, f64),
    along_x: bool,
    dx: f64,
    dy: f64,
    inner: i64,
    outer: i64,
) {
    let if_x = |v: f64| if along_x { v } else { 0.0 };
    let if_y = |v: f64| if along_x { 0.0 } else { v };

    let mut cur = start;
    diagonal(
        points,
        s,
        &mut cur,
        outer,
        (if_y(1.0) * dx, if_x(1.0) * dy),
        (if_x(2.0) * dx, if_y(2.0) * dy),
    );
    diagonal(
        points,
        s,
        &mut cur,
        inner,
        (if_y(1.0) * dx, if_x(1.0) * dy),
        (if_x(1.0) * dx, if_y(1.0) * dy),
    );
    diagonal(
        points,
        s,
        &mut cur,
        outer,
        (if_y(2.0) * dx, if_x(2.0) * dy),
        (if_x(1.0) * dx, if_y(1.0) * dy),
    );
}
