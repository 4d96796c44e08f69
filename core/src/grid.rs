//! Grid topology and scene grid parameters.

use serde::{Deserialize, Serialize};

/// The shape of the scene's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridTopology {
    /// No grid; auras are unsupported and never have geometry.
    Gridless,
    Square,
    /// Flat-top hexes arranged in columns.
    HexColumns,
    /// Pointy-top hexes arranged in rows.
    HexRows,
}

impl GridTopology {
    pub fn is_hex(self) -> bool {
        matches!(self, Self::HexColumns | Self::HexRows)
    }

    pub fn is_column_hex(self) -> bool {
        matches!(self, Self::HexColumns)
    }
}

/// Scene grid parameters supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub topology: GridTopology,
    /// Cell size in linear canvas units. Must be positive.
    pub size: f64,
}

impl GridConfig {
    pub fn new(topology: GridTopology, size: f64) -> Self {
        Self { topology, size }
    }
}
