//! One aura bound to its owning token.

use gridaura_types::{AuraConfig, SquareGridMode};

use crate::geometry::{hex, square, AuraGeometry, GeometryError, Point};
use crate::grid::{GridConfig, GridTopology};
use crate::token::TokenState;

use super::visibility;

/// An aura instance: configuration plus the cached geometry, anchor position
/// and visibility derived from it.
///
/// Geometry is rebuilt only when the footprint, heavy orientation, or the
/// configuration itself changes; position tracking is a plain field write and
/// safe to do every tick.
#[derive(Debug, Clone)]
pub struct Aura {
    config: AuraConfig,
    /// Footprint the geometry was built from. Starts as NaN so the first
    /// update always builds.
    width: f64,
    height: f64,
    heavy: bool,
    position: Point,
    visible: bool,
    /// Absent when the combination is unsupported (gridless scene, negative
    /// radius, uneven hex footprint, disabled aura); containment is then
    /// always false.
    geometry: Option<AuraGeometry>,
}

impl Aura {
    pub fn new(config: AuraConfig) -> Self {
        Self {
            config,
            width: f64::NAN,
            height: f64::NAN,
            heavy: false,
            position: Point::new(0.0, 0.0),
            visible: false,
            geometry: None,
        }
    }

    pub fn config(&self) -> &AuraConfig {
        &self.config
    }

    pub fn geometry(&self) -> Option<&AuraGeometry> {
        self.geometry.as_ref()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Refreshes the cached geometry if any of its inputs changed.
    pub fn update(
        &mut self,
        config: &AuraConfig,
        token: &TokenState,
        grid: GridConfig,
        square_mode: SquareGridMode,
        heavy: bool,
        force: bool,
    ) -> Result<(), GeometryError> {
        let needs_rebuild = force
            || self.width != token.width
            || self.height != token.height
            || self.heavy != heavy
            || self.config != *config;
        if !needs_rebuild {
            return Ok(());
        }

        self.config = config.clone();
        self.width = token.width;
        self.height = token.height;
        self.heavy = heavy;
        self.geometry = self.build_geometry(grid, square_mode)?;
        Ok(())
    }

    fn build_geometry(
        &self,
        grid: GridConfig,
        square_mode: SquareGridMode,
    ) -> Result<Option<AuraGeometry>, GeometryError> {
        let radius = self.config.radius;
        if !self.config.enabled || radius < 0.0 {
            return Ok(None);
        }

        match grid.topology {
            GridTopology::Gridless => Ok(None),
            GridTopology::Square => {
                let points =
                    square::generate_square_polygon(radius, grid.size, square_mode, self.width, self.height);
                Ok(Some(AuraGeometry::new(points)))
            }
            GridTopology::HexColumns | GridTopology::HexRows => {
                // Hexes only support square, whole-cell footprints.
                if self.width != self.height || self.width.fract() != 0.0 || self.width < 1.0 {
                    return Ok(None);
                }
                let points = hex::generate_hex_polygon(
                    radius,
                    grid.size,
                    grid.topology.is_column_hex(),
                    self.width as u32,
                    self.heavy,
                )?;
                Ok(Some(AuraGeometry::new(points)))
            }
        }
    }

    /// Tracks the owning token's anchor without touching geometry.
    pub fn update_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn update_visibility(&mut self, token: &TokenState) {
        self.visible = visibility::aura_visibility(&self.config, token);
    }

    /// Tests a canvas-space point against this aura at its current anchor.
    pub fn is_inside(&self, point: Point) -> bool {
        self.geometry.as_ref().is_some_and(|geometry| {
            geometry.is_inside(Point::new(
                point.x - self.position.x,
                point.y - self.position.y,
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridTopology;

    fn grid(topology: GridTopology) -> GridConfig {
        GridConfig::new(topology, 100.0)
    }

    fn update(aura: &mut Aura, config: &AuraConfig, token: &TokenState, topology: GridTopology) {
        aura.update(config, token, grid(topology), SquareGridMode::Equidistant, false, false)
            .unwrap();
    }

    #[test]
    fn test_first_update_builds_geometry() {
        let config = AuraConfig::new("a");
        let token = TokenState::new("t", 0.0, 0.0);
        let mut aura = Aura::new(config.clone());
        assert!(aura.geometry().is_none());
        update(&mut aura, &config, &token, GridTopology::Square);
        assert!(aura.geometry().is_some());
    }

    #[test]
    fn test_gridless_has_no_geometry() {
        let config = AuraConfig::new("a");
        let token = TokenState::new("t", 0.0, 0.0);
        let mut aura = Aura::new(config.clone());
        update(&mut aura, &config, &token, GridTopology::Gridless);
        assert!(aura.geometry().is_none());
        assert!(!aura.is_inside(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_uneven_hex_footprint_has_no_geometry() {
        let config = AuraConfig::new("a");
        let mut token = TokenState::new("t", 0.0, 0.0);
        token.width = 2.0;
        token.height = 3.0;
        let mut aura = Aura::new(config.clone());
        update(&mut aura, &config, &token, GridTopology::HexRows);
        assert!(aura.geometry().is_none());
    }

    #[test]
    fn test_disabled_aura_contains_nothing() {
        let mut config = AuraConfig::new("a");
        config.enabled = false;
        let token = TokenState::new("t", 0.0, 0.0);
        let mut aura = Aura::new(config.clone());
        update(&mut aura, &config, &token, GridTopology::Square);
        assert!(!aura.is_inside(Point::new(50.0, 50.0)));
    }

    #[test]
    fn test_containment_follows_position() {
        let mut config = AuraConfig::new("a");
        config.radius = 1.0;
        let token = TokenState::new("t", 0.0, 0.0);
        let mut aura = Aura::new(config.clone());
        update(&mut aura, &config, &token, GridTopology::Square);

        assert!(aura.is_inside(Point::new(150.0, 150.0)));
        aura.update_position(Point::new(1000.0, 1000.0));
        assert!(!aura.is_inside(Point::new(150.0, 150.0)));
        assert!(aura.is_inside(Point::new(1150.0, 1150.0)));
    }
}
