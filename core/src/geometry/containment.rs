//! Point-in-polygon testing against generated aura outlines.
//!
//! [`AuraGeometry`] preprocesses a polygon into a y-sorted edge list once,
//! then answers membership queries with a horizontal ray cast. Queries are
//! the hot path: an update pass tests every sample point of every token
//! against every aura, so the per-query work is a bounds check plus a walk
//! over the edges that can still overlap the query's y.

use super::Point;

/// One non-horizontal polygon edge, stored top point first.
#[derive(Debug, Clone, Copy)]
struct Edge {
    /// Endpoint with the smaller y.
    p1: Point,
    /// Endpoint with the larger y.
    p2: Point,
    /// dy/dx; vertical edges store infinity.
    slope: f64,
}

/// A preprocessed aura outline supporting containment queries.
///
/// Coordinates are relative to the top-left of the owning token, matching
/// the polygon generators. Callers translate query points into that frame
/// before testing.
#[derive(Debug, Clone)]
pub struct AuraGeometry {
    points: Vec<Point>,
    /// Edges sorted by top y, then x. Horizontal edges are omitted; they
    /// can never cross a horizontal test ray.
    edges: Vec<Edge>,
    top: f64,
    bottom: f64,
}

impl AuraGeometry {
    pub fn new(points: Vec<Point>) -> Self {
        let mut edges = Vec::with_capacity(points.len());
        let mut top = f64::INFINITY;
        let mut bottom = f64::NEG_INFINITY;

        for (i, &a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            top = top.min(a.y);
            bottom = bottom.max(a.y);

            if a.y == b.y {
                continue;
            }
            let (p1, p2) = if a.y < b.y { (a, b) } else { (b, a) };
            let dx = p2.x - p1.x;
            let slope = if dx == 0.0 {
                f64::INFINITY
            } else {
                (p2.y - p1.y) / dx
            };
            edges.push(Edge { p1, p2, slope });
        }

        edges.sort_by(|a, b| {
            a.p1.y
                .total_cmp(&b.p1.y)
                .then_with(|| a.p1.x.total_cmp(&b.p1.x))
        });

        Self {
            points,
            edges,
            top,
            bottom,
        }
    }

    /// The outline this geometry was built from.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Tests whether the point lies inside the outline.
    ///
    /// A horizontal ray is cast from the left towards the point; an odd
    /// number of edge crossings means inside. Each edge spans the half-open
    /// interval `[p1.y, p2.y)` so a ray through a shared vertex counts the
    /// edge below it exactly once.
    pub fn is_inside(&self, point: Point) -> bool {
        if point.y < self.top || point.y > self.bottom {
            return false;
        }

        let mut crossings = 0;
        for edge in &self.edges {
            // Sorted by top y, so nothing after this edge can span the ray.
            if point.y < edge.p1.y {
                break;
            }
            if point.y >= edge.p2.y {
                continue;
            }
            let edge_x = (point.y - edge.p1.y) / edge.slope + edge.p1.x;
            if edge_x < point.x {
                crossings += 1;
            }
        }

        crossings % 2 == 1
    }
}
