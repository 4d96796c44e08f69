//! Aura configuration records.
//!
//! An aura is described entirely by one of these records, attached to a token
//! as part of a plain ordered list. Records may be partial on the wire: every
//! field carries a serde default, so deserializing an incomplete record
//! resolves missing fields to the documented defaults (later-wins, shallow).

use serde::{Deserialize, Serialize};

use crate::visibility::VisibilityConfig;

// ═══════════════════════════════════════════════════════════════════════════
// Enumerations
// ═══════════════════════════════════════════════════════════════════════════

/// Boundary-shape policy for auras on square grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SquareGridMode {
    /// Simple rectangle expanded by the radius on all sides (Chebyshev distance).
    #[default]
    Equidistant,
    /// Staircase corner diagonals; the closest approximation of a circle.
    Alternating,
    /// Radius-length 45-degree corner cuts (Manhattan distance).
    Manhattan,
}

/// Which tokens an aura's effect automation applies to, matched against the
/// entering token's disposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenTarget {
    #[default]
    All,
    Friendly,
    Hostile,
}

/// Stroke style for the aura outline. Opaque to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineType {
    None,
    #[default]
    Solid,
    Dashed,
}

/// Fill style for the aura interior. Opaque to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FillType {
    None,
    #[default]
    Solid,
    Pattern,
}

// ═══════════════════════════════════════════════════════════════════════════
// Presentation records (carried, never interpreted by the core)
// ═══════════════════════════════════════════════════════════════════════════

/// Outline presentation. The core only carries this through to renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineConfig {
    pub line_type: LineType,
    pub width: f64,
    pub color: String,
    pub opacity: f64,
    pub dash_size: f64,
    pub gap_size: f64,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            line_type: LineType::Solid,
            width: 4.0,
            color: "#FF0000".to_string(),
            opacity: 0.8,
            dash_size: 15.0,
            gap_size: 10.0,
        }
    }
}

/// Interior presentation. The core only carries this through to renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FillConfig {
    pub fill_type: FillType,
    pub color: String,
    pub opacity: f64,
    pub texture: String,
    pub texture_offset: (f64, f64),
    pub texture_scale: (f64, f64),
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            fill_type: FillType::Solid,
            color: "#FF0000".to_string(),
            opacity: 0.1,
            texture: String::new(),
            texture_offset: (0.0, 0.0),
            texture_scale: (100.0, 100.0),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Automation records
// ═══════════════════════════════════════════════════════════════════════════

/// Status effect toggled on tokens entering/leaving the aura.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EffectConfig {
    /// Identifier of the effect to toggle. `None` disables effect automation
    /// for this aura.
    pub effect_id: Option<String>,
    /// Whether the effect is applied as an overlay.
    pub is_overlay: bool,
    /// Which tokens the effect applies to.
    pub target_tokens: TokenTarget,
}

/// Scripted callback invoked on every enter/leave transition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MacroConfig {
    /// Identifier of the callback to run. `None` disables it.
    pub macro_id: Option<String>,
}

/// Terrain Height Tools integration parameters. Carried for consumers that
/// integrate with that module; never interpreted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TerrainHeightToolsConfig {
    /// Height ruler behaviour while dragging; `"NONE"` disables it. Opaque
    /// to this crate, validated by the consumer.
    pub ruler_on_drag: String,
    /// Which tokens rulers are drawn to.
    pub target_tokens: TokenTarget,
}

impl Default for TerrainHeightToolsConfig {
    fn default() -> Self {
        Self {
            ruler_on_drag: "NONE".to_string(),
            target_tokens: TokenTarget::All,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Aura record
// ═══════════════════════════════════════════════════════════════════════════

/// One aura attached to a token.
///
/// `id` must be unique among the auras listed on a single token. `radius` is
/// measured in grid cells and must be non-negative; on hex grids it must also
/// be a whole number (enforced by the polygon generator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuraConfig {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    pub radius: f64,
    pub line: LineConfig,
    pub fill: FillConfig,
    /// Visibility rules applied when the viewer owns the token.
    pub owner_visibility: VisibilityConfig,
    /// Visibility rules applied when the viewer does not own the token.
    pub non_owner_visibility: VisibilityConfig,
    pub effect: EffectConfig,
    #[serde(rename = "macro")]
    pub macro_: MacroConfig,
    pub terrain_height_tools: TerrainHeightToolsConfig,
}

impl Default for AuraConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: "New Aura".to_string(),
            enabled: true,
            radius: 1.0,
            line: LineConfig::default(),
            fill: FillConfig::default(),
            owner_visibility: VisibilityConfig::default(),
            non_owner_visibility: VisibilityConfig::default(),
            effect: EffectConfig::default(),
            macro_: MacroConfig::default(),
            terrain_height_tools: TerrainHeightToolsConfig::default(),
        }
    }
}

impl AuraConfig {
    /// A new aura record with the given id and all other fields defaulted.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_record_resolves_to_defaults() {
        // Hosts may store records written by older versions that lack newer
        // fields; they must deserialize with the documented defaults.
        let aura: AuraConfig = toml::from_str(
            r#"
            id = "abc123"
            radius = 3.0
            "#,
        )
        .unwrap();

        assert_eq!(aura.id, "abc123");
        assert_eq!(aura.radius, 3.0);
        assert!(aura.enabled);
        assert_eq!(aura.name, "New Aura");
        assert_eq!(aura.line.width, 4.0);
        assert_eq!(aura.fill.opacity, 0.1);
        assert!(aura.owner_visibility.default_);
        assert_eq!(aura.effect.effect_id, None);
        assert_eq!(aura.effect.target_tokens, TokenTarget::All);
        assert_eq!(aura.macro_.macro_id, None);
        assert_eq!(aura.terrain_height_tools.ruler_on_drag, "NONE");
        assert_eq!(aura.terrain_height_tools.target_tokens, TokenTarget::All);
    }

    #[test]
    fn test_terrain_height_tools_carried_through() {
        let aura: AuraConfig = toml::from_str(
            r#"
            id = "a2"

            [terrainHeightTools]
            rulerOnDrag = "DRAGGED"
            targetTokens = "FRIENDLY"
            "#,
        )
        .unwrap();

        assert_eq!(aura.terrain_height_tools.ruler_on_drag, "DRAGGED");
        assert_eq!(
            aura.terrain_height_tools.target_tokens,
            TokenTarget::Friendly
        );
    }

    #[test]
    fn test_effect_config_round_trip() {
        let aura: AuraConfig = toml::from_str(
            r#"
            id = "a1"

            [effect]
            effectId = "stunned"
            isOverlay = true
            targetTokens = "HOSTILE"
            "#,
        )
        .unwrap();

        assert_eq!(aura.effect.effect_id.as_deref(), Some("stunned"));
        assert!(aura.effect.is_overlay);
        assert_eq!(aura.effect.target_tokens, TokenTarget::Hostile);

        let out = toml::to_string(&aura).unwrap();
        let back: AuraConfig = toml::from_str(&out).unwrap();
        assert_eq!(aura, back);
    }
}
