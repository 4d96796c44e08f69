//! Polygon generation, point sampling, and containment testing.
//!
//! Everything in here is pure: generators map (radius, footprint, grid
//! parameters) to a vertex sequence, sampling maps a footprint to the set of
//! points that stand in for "the token", and [`AuraGeometry`] answers
//! point-in-polygon queries against a generated outline. All coordinates are
//! relative to the top-left of the owning token's bounding box, so callers
//! position an aura using only the token's top-left coordinate.

pub mod containment;
pub mod hex;
pub mod sampling;
pub mod square;

#[cfg(test)]
mod hex_tests;
#[cfg(test)]
mod sampling_tests;
#[cfg(test)]
mod square_tests;

pub use containment::AuraGeometry;

/// A 2D point in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Invalid geometry input. These indicate a caller or configuration bug and
/// fail fast rather than being silently clamped.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("aura radius must be a whole number of grid cells, got {0}")]
    NonIntegerRadius(f64),
    #[error("token centre size must be a positive, non-zero integer")]
    InvalidCenterSize,
    #[error("resulting hex aura would be of size zero or smaller")]
    DegenerateShape,
}
