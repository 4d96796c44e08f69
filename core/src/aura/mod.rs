//! Aura instances, the containment registry, and the transition engine.
//!
//! An [`Aura`] binds one configuration record to cached geometry for its
//! owning token. The [`AuraRegistry`] is pure bookkeeping: which auras each
//! token owns and the bidirectional "token is inside aura" index. The
//! [`AuraEngine`] drives both, re-testing containment after each change and
//! dispatching transition events.

mod engine;
mod instance;
mod registry;
mod visibility;


pub use engine::{
    AuraEngine, DefaultOrientation, EngineOptions, FootprintOrientation, UpdateOptions,
};
pub use instance::Aura;
pub use registry::AuraRegistry;
