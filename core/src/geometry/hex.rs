//! Hex aura polygon generation.
//!
//! The boundary of a hex aura is itself a larger hexagon traced as six sides,
//! each side made of one unit hex edge per covered cell. Auras around
//! even-sized tokens gain one extra unit edge on alternating sides; whether
//! the long sides sit top/left or bottom/right depends on the token's "heavy"
//! orientation.

use super::{GeometryError, Point};

/// Side length of a unit hexagon with an apothem of 0.5.
pub fn edge_length(grid_size: f64) -> f64 {
    grid_size / 3f64.sqrt()
}

/// Generates a hex aura polygon for the given radius.
///
/// The origin of the polygon is the top-left of the bounding box of the
/// centre shape, so the polygon can be anchored at the owning token's
/// top-left coordinate.
///
/// * `radius` - aura radius in grid cells; must be a non-negative integer.
/// * `columns` - whether the grid runs in columns (flat-top) or rows
///   (pointy-top).
/// * `center_size` - token size in grid cells; must be a positive integer.
/// * `heavy` - for evenly-sized centres, whether the bottom/right is the
///   larger part.
pub fn generate_hex_polygon(
    radius: f64,
    grid_size: f64,
    columns: bool,
    center_size: u32,
    heavy: bool,
) -> Result<Vec<Point>, GeometryError> {
    if radius.fract() != 0.0 {
        return Err(GeometryError::NonIntegerRadius(radius));
    }
    if center_size == 0 {
        return Err(GeometryError::InvalidCenterSize);
    }

    // The given centre size is the token size, not the radius of the centre
    // shape, so convert.
    let center_radius = i64::from(center_size.div_ceil(2));
    let radius_cells = radius as i64;

    if radius_cells + center_radius <= 0 {
        return Err(GeometryError::DegenerateShape);
    }

    let edge = edge_length(grid_size);
    let mut points = Vec::new();

    // Row grids start offset by half a turn so the hexes are pointy-top.
    let mut angle: i32 = if columns { 0 } else { -30 };

    // Initial cursor so that (0,0) of the polygon lines up with the top-left
    // corner of the bounding box of the centre shape.
    let mut cursor = token_offset(edge, grid_size, columns, center_size, radius, heavy);

    for side in 0..6 {
        let mut edges_on_side = radius_cells + center_radius;
        // Even-sized centres put one extra unit edge on alternating sides;
        // `heavy` selects which sides get it.
        if center_size % 2 == 0 && side % 2 == i32::from(heavy) {
            edges_on_side += 1;
        }

        for j in 0..edges_on_side {
            if j > 0 {
                add_edge(&mut points, &mut cursor, angle + 60, edge);
            }
            add_edge(&mut points, &mut cursor, angle, edge);
        }

        angle += 60;
    }

    Ok(points)
}

/// Pushes the current cursor as a vertex, then advances it one unit edge in
/// the given direction.
fn add_edge(points: &mut Vec<Point>, cursor: &mut Point, angle_deg: i32, edge: f64) {
    points.push(*cursor);
    let rad = f64::from(angle_deg).to_radians();
    cursor.x += rad.cos() * edge;
    cursor.y += rad.sin() * edge;
}

/// Closed-form offset of the polygon's first vertex from the token's
/// top-left corner.
///
/// First finds the first vertex of the zero-radius shape (which accounts for
/// heavy orientation), then shifts it out by the aura radius.
pub fn token_offset(
    edge: f64,
    grid_size: f64,
    columns: bool,
    center_size: u32,
    radius: f64,
    heavy: bool,
) -> Point {
    let even = center_size % 2 == 0;
    if columns {
        let shift = if !heavy && even { 1.0 } else { 0.0 };
        let x0 = (f64::from(center_size / 2) - shift) * edge * 1.5 + edge * 0.5;
        Point::new(x0, -radius * grid_size)
    } else {
        let shift = if heavy && even { 1.0 } else { 0.0 };
        let x0 = (f64::from((center_size - 1) / 2) + shift) * grid_size / 2.0;
        let y0 = edge / 2.0;
        Point::new(x0 - grid_size * 0.5 * radius, y0 - edge * 1.5 * radius)
    }
}
