//! Grid-aware aura containment engine.
//!
//! This crate draws and tracks grid-shaped auras anchored to movable tokens
//! and detects which other tokens fall inside each aura as things move.
//!
//! # Architecture
//!
//! ```text
//! token / config change
//!         │
//!         ▼
//! ┌──────────────────┐   polygon    ┌───────────────────┐
//! │ AuraEngine        │────────────▶│ geometry::{hex,    │
//! │ (orchestration)   │             │ square, sampling}  │
//! └──────────────────┘             └───────────────────┘
//!         │ containment pass                 │
//!         ▼                                  ▼
//! ┌──────────────────┐             ┌───────────────────┐
//! │ AuraRegistry      │             │ AuraGeometry       │
//! │ (dual index)      │             │ (ray casting)      │
//! └──────────────────┘             └───────────────────┘
//!         │ state flip
//!         ▼
//! TransitionEvent → handlers, effect toggler, macro runner
//! ```
//!
//! The engine is single-threaded: every update runs to completion before
//! queries observe the registry again.

pub mod aura;
pub mod events;
pub mod geometry;
pub mod grid;
pub mod token;

pub use aura::{
    Aura, AuraEngine, AuraRegistry, DefaultOrientation, EngineOptions, FootprintOrientation,
    UpdateOptions,
};
pub use events::{EffectToggler, MacroError, MacroRunner, TransitionEvent, TransitionHandler};
pub use geometry::{AuraGeometry, GeometryError, Point};
pub use grid::{GridConfig, GridTopology};
pub use token::{AuraRef, Disposition, TokenRef, TokenState};
