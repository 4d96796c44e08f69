use gridaura_types::AuraConfig;

use crate::token::TokenRef;

/// One containment state flip: a token entered or left an aura.
///
/// Emitted exactly once per flip; re-running a pass with unchanged inputs
/// produces no events.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionEvent {
    /// The token that crossed the boundary.
    pub token: TokenRef,
    /// The token owning the aura.
    pub owner: TokenRef,
    /// Snapshot of the aura's configuration at the time of the flip.
    pub aura: AuraConfig,
    pub has_entered: bool,
    /// Either side of the pair is a drag preview.
    pub is_preview: bool,
    /// Part of an initial bulk pass rather than movement; consumers use
    /// this to suppress side effects while a scene settles.
    pub is_initial: bool,
    /// The user whose action caused the transition.
    pub user_id: Option<String>,
}
