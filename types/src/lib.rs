//! Shared configuration types for the gridaura engine.
//!
//! These are the plain data records a host supplies for each token: what an
//! aura looks like, when it is visible, and what automation it drives. The
//! geometry and containment logic that consumes them lives in `gridaura-core`.

pub mod aura;
pub mod visibility;

pub use aura::{
    AuraConfig, EffectConfig, FillConfig, FillType, LineConfig, LineType, MacroConfig,
    SquareGridMode, TerrainHeightToolsConfig, TokenTarget,
};
pub use visibility::{VisibilityConfig, VisibilityPreset};
