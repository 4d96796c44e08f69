//! The aura bookkeeping index.
//!
//! Holds every registered [`Aura`] keyed by its owning token, plus the
//! bidirectional containment index: aura -> tokens inside it and token ->
//! auras containing it. The two directions must always agree, so
//! [`AuraRegistry::set_is_inside`] is the only mutation point for them and
//! updates both sides together.

use std::collections::{HashMap, HashSet};

use crate::token::{AuraRef, TokenRef};

use super::instance::Aura;

#[derive(Debug, Default)]
pub struct AuraRegistry {
    /// Aura instances per owning token, in configuration order.
    auras: HashMap<TokenRef, Vec<Aura>>,
    tokens_in_aura: HashMap<AuraRef, HashSet<TokenRef>>,
    auras_containing: HashMap<TokenRef, HashSet<AuraRef>>,
}

impl AuraRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an aura for a token, replacing any existing instance with the
    /// same id.
    pub fn register_aura(&mut self, owner: &TokenRef, aura: Aura) {
        let list = self.auras.entry(owner.clone()).or_default();
        match list.iter_mut().find(|a| a.config().id == aura.config().id) {
            Some(slot) => *slot = aura,
            None => list.push(aura),
        }
    }

    /// Removes an aura and all containment entries referring to it. Returns
    /// whether the aura existed.
    pub fn deregister_aura(&mut self, aura: &AuraRef) -> bool {
        let Some(list) = self.auras.get_mut(&aura.owner) else {
            return false;
        };
        let Some(index) = list.iter().position(|a| a.config().id == aura.aura_id) else {
            return false;
        };
        list.remove(index);
        if list.is_empty() {
            self.auras.remove(&aura.owner);
        }

        if let Some(tokens) = self.tokens_in_aura.remove(aura) {
            for token in tokens {
                if let Some(set) = self.auras_containing.get_mut(&token) {
                    set.remove(aura);
                    if set.is_empty() {
                        self.auras_containing.remove(&token);
                    }
                }
            }
        }
        true
    }

    /// Removes a token entirely: its owned auras and every containment entry
    /// it appears in, in both directions.
    pub fn deregister_token(&mut self, token: &TokenRef) {
        let owned: Vec<AuraRef> = self
            .auras
            .get(token)
            .map(|list| list.iter().map(|a| token.aura(&a.config().id)).collect())
            .unwrap_or_default();
        for aura in owned {
            self.deregister_aura(&aura);
        }

        if let Some(containing) = self.auras_containing.remove(token) {
            for aura in containing {
                if let Some(set) = self.tokens_in_aura.get_mut(&aura) {
                    set.remove(token);
                    if set.is_empty() {
                        self.tokens_in_aura.remove(&aura);
                    }
                }
            }
        }
    }

    pub fn has_aura(&self, aura: &AuraRef) -> bool {
        self.get_aura(aura).is_some()
    }

    pub fn get_aura(&self, aura: &AuraRef) -> Option<&Aura> {
        self.auras
            .get(&aura.owner)?
            .iter()
            .find(|a| a.config().id == aura.aura_id)
    }

    pub fn get_aura_mut(&mut self, aura: &AuraRef) -> Option<&mut Aura> {
        self.auras
            .get_mut(&aura.owner)?
            .iter_mut()
            .find(|a| a.config().id == aura.aura_id)
    }

    pub fn get_token_auras(&self, token: &TokenRef) -> &[Aura] {
        self.auras.get(token).map_or(&[], Vec::as_slice)
    }

    pub fn token_auras_mut(&mut self, token: &TokenRef) -> impl Iterator<Item = &mut Aura> {
        self.auras.get_mut(token).into_iter().flatten()
    }

    /// Keys of every registered aura.
    pub fn aura_refs(&self) -> Vec<AuraRef> {
        self.auras
            .iter()
            .flat_map(|(owner, list)| list.iter().map(|a| owner.aura(&a.config().id)))
            .collect()
    }

    /// Tokens currently inside the aura. Unregistered auras log a warning
    /// and report empty; this happens in normal teardown races.
    pub fn tokens_inside_aura(&self, aura: &AuraRef) -> Vec<TokenRef> {
        if !self.has_aura(aura) {
            tracing::warn!(aura = %aura, "containment lookup for unregistered aura");
            return Vec::new();
        }
        self.tokens_in_aura
            .get(aura)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn auras_containing_token(&self, token: &TokenRef) -> Vec<AuraRef> {
        self.auras_containing
            .get(token)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_inside(&self, token: &TokenRef, aura: &AuraRef) -> bool {
        self.auras_containing
            .get(token)
            .is_some_and(|set| set.contains(aura))
    }

    /// Records a containment state, keeping both index directions in step.
    /// Returns whether the state actually changed; a repeated write is a
    /// no-op and returns false.
    pub fn set_is_inside(&mut self, token: &TokenRef, aura: &AuraRef, inside: bool) -> bool {
        if !self.has_aura(aura) {
            tracing::warn!(aura = %aura, "containment update for unregistered aura");
            return false;
        }
        if self.is_inside(token, aura) == inside {
            return false;
        }

        if inside {
            self.tokens_in_aura
                .entry(aura.clone())
                .or_default()
                .insert(token.clone());
            self.auras_containing
                .entry(token.clone())
                .or_default()
                .insert(aura.clone());
        } else {
            if let Some(set) = self.tokens_in_aura.get_mut(aura) {
                set.remove(token);
                if set.is_empty() {
                    self.tokens_in_aura.remove(aura);
                }
            }
            if let Some(set) = self.auras_containing.get_mut(token) {
                set.remove(aura);
                if set.is_empty() {
                    self.auras_containing.remove(token);
                }
            }
        }
        true
    }

    pub fn clear(&mut self) {
        self.auras.clear();
        self.tokens_in_aura.clear();
        self.auras_containing.clear();
    }
}
