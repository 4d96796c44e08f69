//! Aura visibility rule sets.
//!
//! Each aura carries two [`VisibilityConfig`]s, one for viewers that own the
//! token and one for everyone else. Each flag answers "is the aura visible
//! while the token is in this state". The flags are OR'd over the states the
//! token is currently in; `default_` applies only when no other flag was
//! relevant at all. That evaluation lives in `gridaura-core`.

use serde::{Deserialize, Serialize};

/// Per-state visibility flags for one viewing relationship.
///
/// Missing fields deserialize as `true` so that rule sets written before a
/// state existed keep showing the aura in that state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisibilityConfig {
    /// Fallback when none of the other states applies to the token.
    #[serde(rename = "default")]
    pub default_: bool,
    pub hovered: bool,
    pub controlled: bool,
    pub dragging: bool,
    pub targeted: bool,
    pub turn: bool,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            default_: true,
            hovered: true,
            controlled: true,
            dragging: true,
            targeted: true,
            turn: true,
        }
    }
}

impl VisibilityConfig {
    /// All flags off.
    pub const NONE: Self = Self {
        default_: false,
        hovered: false,
        controlled: false,
        dragging: false,
        targeted: false,
        turn: false,
    };

    /// All flags on.
    pub const ALWAYS: Self = Self {
        default_: true,
        hovered: true,
        controlled: true,
        dragging: true,
        targeted: true,
        turn: true,
    };
}

/// Named presets mapping onto an `(owner, non_owner)` pair of rule sets.
///
/// These are the stock choices a configuration UI offers; custom rule sets
/// are equally valid and simply do not correspond to any preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityPreset {
    Always,
    OwnerOnly,
    Hover,
    OwnerHover,
    Control,
    Drag,
    Turn,
    OwnerTurn,
    None,
}

impl VisibilityPreset {
    /// The `(owner, non_owner)` rule sets this preset stands for.
    pub fn configs(self) -> (VisibilityConfig, VisibilityConfig) {
        let only = |f: fn(&mut VisibilityConfig)| {
            let mut v = VisibilityConfig::NONE;
            f(&mut v);
            v
        };
        match self {
            Self::Always => (
                VisibilityConfig::ALWAYS,
                VisibilityConfig {
                    // Non-owners never control or drag a token, so those flags
                    // are inert here; kept off for clarity.
                    controlled: false,
                    dragging: false,
                    ..VisibilityConfig::ALWAYS
                },
            ),
            Self::OwnerOnly => (VisibilityConfig::ALWAYS, VisibilityConfig::NONE),
            Self::Hover => (only(|v| v.hovered = true), only(|v| v.hovered = true)),
            Self::OwnerHover => (only(|v| v.hovered = true), VisibilityConfig::NONE),
            Self::Control => (only(|v| v.controlled = true), VisibilityConfig::NONE),
            Self::Drag => (only(|v| v.dragging = true), VisibilityConfig::NONE),
            Self::Turn => (only(|v| v.turn = true), only(|v| v.turn = true)),
            Self::OwnerTurn => (only(|v| v.turn = true), VisibilityConfig::NONE),
            Self::None => (VisibilityConfig::NONE, VisibilityConfig::NONE),
        }
    }
}
