//! Sample points standing in for a token's footprint.
//!
//! Containment is decided per grid cell, not per pixel: a token is inside an
//! aura when any of the centres of the cells it occupies is inside the
//! outline. These functions enumerate those centres, in the same
//! top-left-relative frame the polygon generators use, so a caller only has
//! to translate by the difference of the two tokens' positions.

use super::{hex::edge_length, Point};

/// Cell centres covered by a `width` x `height` token on a square grid.
pub fn square_points_under_token(grid_size: f64, width: f64, height: f64) -> Vec<Point> {
    let cols = (width.round() as i64).max(1);
    let rows = (height.round() as i64).max(1);

    let mut points = Vec::with_capacity((cols * rows) as usize);
    for j in 0..rows {
        for i in 0..cols {
            points.push(Point::new(
                (i as f64 + 0.5) * grid_size,
                (j as f64 + 0.5) * grid_size,
            ));
        }
    }
    points
}

/// Cell centres covered by a size-`center_size` token on a hex grid.
///
/// The hexagonal footprint is decomposed into rows (row grids) or columns
/// (column grids) of cells. The pivot row is full width; rows shrink by one
/// cell per step away from it and are centred under it. Evenly-sized tokens
/// have no middle row, so `heavy` picks whether the pivot sits past the
/// midpoint or before it.
pub fn hex_points_under_token(
    grid_size: f64,
    columns: bool,
    center_size: u32,
    heavy: bool,
) -> Vec<Point> {
    if center_size == 0 {
        return Vec::new();
    }

    let c = i64::from(center_size);
    let pivot = if center_size % 2 == 1 {
        (c - 1) / 2
    } else if heavy {
        c / 2
    } else {
        c / 2 - 1
    };

    let edge = edge_length(grid_size);
    let mut points = Vec::new();

    for i in 0..c {
        let len = c - (i - pivot).abs();
        // Shorter rows are centred under the pivot row.
        let offset = (c - len) as f64 * grid_size / 2.0;
        let across = edge * (1.0 + 1.5 * i as f64);

        for j in 0..len {
            let along = offset + (j as f64 + 0.5) * grid_size;
            if columns {
                points.push(Point::new(across, along));
            } else {
                points.push(Point::new(along, across));
            }
        }
    }

    points
}
