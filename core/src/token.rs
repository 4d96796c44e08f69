//! Token snapshots and composite keys.
//!
//! A committed token and its in-progress drag preview can exist on the canvas
//! at the same time with the same identifier. Everything in this crate keys
//! tokens by [`TokenRef`], the (id, is_preview) composite, so the two never
//! collide.

use std::fmt;

use gridaura_types::{AuraConfig, TokenTarget};

use crate::geometry::Point;

/// Composite key identifying one token representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenRef {
    pub id: String,
    pub is_preview: bool,
}

impl TokenRef {
    pub fn new(id: impl Into<String>, is_preview: bool) -> Self {
        Self {
            id: id.into(),
            is_preview,
        }
    }

    /// Key for an aura owned by this token.
    pub fn aura(&self, aura_id: impl Into<String>) -> AuraRef {
        AuraRef {
            owner: self.clone(),
            aura_id: aura_id.into(),
        }
    }
}

impl fmt::Display for TokenRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.id, self.is_preview)
    }
}

/// Composite key identifying one aura: owning token plus aura id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuraRef {
    pub owner: TokenRef,
    pub aura_id: String,
}

impl fmt::Display for AuraRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.owner, self.aura_id)
    }
}

/// Token disposition, matched against an aura's effect target filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disposition {
    Friendly,
    #[default]
    Neutral,
    Hostile,
}

/// Snapshot of one token, supplied by the host for each update pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenState {
    pub id: String,
    pub is_preview: bool,
    /// Committed placement (top-left corner).
    pub position: Point,
    /// Current on-canvas position; differs from `position` mid-drag or while
    /// a movement animation is playing.
    pub live_position: Point,
    /// Footprint width in grid cells.
    pub width: f64,
    /// Footprint height in grid cells.
    pub height: f64,
    pub hidden: bool,
    pub hovered: bool,
    pub controlled: bool,
    pub targeted: bool,
    /// In combat and currently the active turn.
    pub has_turn: bool,
    /// Whether the viewing user owns this token.
    pub is_owner: bool,
    /// True on a committed token that currently has a drag-preview copy.
    pub has_preview: bool,
    pub disposition: Disposition,
    /// The ordered aura configuration list attached to this token.
    pub auras: Vec<AuraConfig>,
}

impl TokenState {
    /// A 1x1 token at the given committed position with every flag off.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        let position = Point::new(x, y);
        Self {
            id: id.into(),
            is_preview: false,
            position,
            live_position: position,
            width: 1.0,
            height: 1.0,
            hidden: false,
            hovered: false,
            controlled: false,
            targeted: false,
            has_turn: false,
            is_owner: false,
            has_preview: false,
            disposition: Disposition::default(),
            auras: Vec::new(),
        }
    }

    pub fn token_ref(&self) -> TokenRef {
        TokenRef::new(self.id.clone(), self.is_preview)
    }

    /// Position used for containment testing.
    pub fn test_position(&self, use_live: bool) -> Point {
        if use_live { self.live_position } else { self.position }
    }

    /// Whether this token matches an aura's effect target filter.
    pub fn matches_target(&self, target: TokenTarget) -> bool {
        match target {
            TokenTarget::All => true,
            TokenTarget::Friendly => self.disposition == Disposition::Friendly,
            TokenTarget::Hostile => self.disposition == Disposition::Hostile,
        }
    }
}
