//! Transition notifications and collaborator seams.
//!
//! The engine never performs side effects itself. Every containment flip
//! produces one [`TransitionEvent`], which is fanned out to registered
//! [`TransitionHandler`]s and, subject to the automation options, to the
//! [`EffectToggler`] and [`MacroRunner`] implementations the host supplies.

mod handler;
mod transition;

pub use handler::{EffectToggler, MacroError, MacroRunner, TransitionHandler};
pub use transition::TransitionEvent;
