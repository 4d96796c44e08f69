use crate::token::TokenRef;

use super::TransitionEvent;

/// Notification bus consumer. Every registered handler sees every event.
pub trait TransitionHandler {
    fn on_transition(&mut self, event: &TransitionEvent);
}

/// Applies or removes a status effect on a token.
///
/// Fire-and-forget from the engine's perspective; completion and failure
/// are the implementation's concern.
pub trait EffectToggler {
    fn set_effect(&mut self, token: &TokenRef, effect_id: &str, active: bool, overlay: bool);
}

/// Runs a scripted callback for a transition.
pub trait MacroRunner {
    fn run(&mut self, macro_id: &str, event: &TransitionEvent) -> Result<(), MacroError>;
}

/// Failure reported by a [`MacroRunner`]. Logged by the engine and never
/// allowed to abort a containment pass.
#[derive(Debug, thiserror::Error)]
pub enum MacroError {
    #[error("no macro with id {0}")]
    NotFound(String),
    #[error("macro {id} failed: {message}")]
    Failed { id: String, message: String },
}
