//! Aura visibility evaluation.
//!
//! An aura's config carries two rule sets, one for the owning viewer and one
//! for everyone else. Rules are OR'd over the token states that currently
//! hold; the `default` rule applies only when no other rule was relevant at
//! all, rather than being one more OR term.

use gridaura_types::{AuraConfig, VisibilityConfig};

use crate::token::TokenState;

/// Whether the aura should currently be shown for this token.
pub(crate) fn aura_visibility(config: &AuraConfig, token: &TokenState) -> bool {
    if token.hidden || !config.enabled {
        return false;
    }
    // While a drag preview exists, the committed token's copy stays hidden
    // so the aura is not drawn twice.
    if token.has_preview && !token.is_preview {
        return false;
    }

    let rules = if token.is_owner {
        &config.owner_visibility
    } else {
        &config.non_owner_visibility
    };
    rules_allow(rules, token)
}

pub(crate) fn rules_allow(rules: &VisibilityConfig, token: &TokenState) -> bool {
    let mut any_relevant = false;
    let mut visible = false;
    let mut apply = |state: bool, rule: bool| {
        if state {
            any_relevant = true;
            visible |= rule;
        }
    };

    apply(token.hovered, rules.hovered);
    apply(token.controlled, rules.controlled);
    apply(token.is_preview, rules.dragging);
    apply(token.targeted, rules.targeted);
    apply(token.has_turn, rules.turn);

    if any_relevant { visible } else { rules.default_ }
}
