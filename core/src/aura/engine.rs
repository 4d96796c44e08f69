//! The containment and transition engine.
//!
//! One engine exists per active scene. Hosts feed it token snapshots after
//! every change; it keeps aura instances in step with each token's
//! configuration list, re-tests containment for the affected pairs, and
//! dispatches one [`TransitionEvent`] per state flip. Side effects (status
//! effects, macros) are routed through injected collaborators and gated by
//! the engine options.

use gridaura_types::SquareGridMode;

use crate::events::{EffectToggler, MacroRunner, TransitionEvent, TransitionHandler};
use crate::geometry::{sampling, GeometryError, Point};
use crate::grid::{GridConfig, GridTopology};
use crate::token::{AuraRef, TokenRef, TokenState};

use super::instance::Aura;
use super::registry::AuraRegistry;

/// Scene-level engine settings, fixed at construction.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub square_mode: SquareGridMode,
    /// Toggle status effects when tokens enter or leave auras that name one.
    pub effect_automation: bool,
    /// Run aura macros on transitions.
    pub macro_automation: bool,
    /// The local user. Effects are applied only by the client whose user
    /// instigated the transition.
    pub user_id: Option<String>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            square_mode: SquareGridMode::default(),
            effect_automation: true,
            macro_automation: true,
            user_id: None,
        }
    }
}

/// Per-pass options for [`AuraEngine::update_auras`].
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Restrict the pass to pairs involving this token.
    pub token: Option<TokenRef>,
    /// Rebuild geometry even when inputs look unchanged.
    pub force: bool,
    /// An initial bulk pass; transitions are flagged so consumers can
    /// suppress side effects while the scene settles.
    pub is_initial: bool,
    /// Test against on-canvas positions instead of committed ones; used for
    /// drag-preview passes.
    pub use_live_position: bool,
    /// The user whose action caused this pass. Defaults to the local user.
    pub user_id: Option<String>,
}

/// Decides the heavy/light orientation of even-sized hex footprints.
///
/// An injected capability so alternative footprint-shape providers can be
/// substituted per scene.
pub trait FootprintOrientation {
    fn is_heavy(&self, token: &TokenState) -> bool;
}

/// Stock rule: only width-2 tokens are heavy.
#[derive(Debug, Default)]
pub struct DefaultOrientation;

impl FootprintOrientation for DefaultOrientation {
    fn is_heavy(&self, token: &TokenState) -> bool {
        token.width == 2.0
    }
}

pub struct AuraEngine {
    grid: GridConfig,
    options: EngineOptions,
    registry: AuraRegistry,
    orientation: Box<dyn FootprintOrientation>,
    handlers: Vec<Box<dyn TransitionHandler>>,
    effect_toggler: Option<Box<dyn EffectToggler>>,
    macro_runner: Option<Box<dyn MacroRunner>>,
    tearing_down: bool,
}

impl AuraEngine {
    pub fn new(grid: GridConfig, options: EngineOptions) -> Self {
        Self {
            grid,
            options,
            registry: AuraRegistry::new(),
            orientation: Box::new(DefaultOrientation),
            handlers: Vec::new(),
            effect_toggler: None,
            macro_runner: None,
            tearing_down: false,
        }
    }

    pub fn registry(&self) -> &AuraRegistry {
        &self.registry
    }

    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    pub fn add_handler(&mut self, handler: Box<dyn TransitionHandler>) {
        self.handlers.push(handler);
    }

    pub fn set_effect_toggler(&mut self, toggler: Box<dyn EffectToggler>) {
        self.effect_toggler = Some(toggler);
    }

    pub fn set_macro_runner(&mut self, runner: Box<dyn MacroRunner>) {
        self.macro_runner = Some(runner);
    }

    pub fn set_orientation(&mut self, orientation: Box<dyn FootprintOrientation>) {
        self.orientation = orientation;
    }

    /// Brings aura instances in step with each token's configuration list,
    /// then re-tests containment for the affected pairs.
    ///
    /// Vanished auras fire a leave for every contained token before they are
    /// removed; new and changed auras are rebuilt strictly before the
    /// containment pass runs.
    pub fn update_auras(
        &mut self,
        tokens: &[TokenState],
        opts: &UpdateOptions,
    ) -> Result<(), GeometryError> {
        for state in tokens {
            if let Some(filter) = &opts.token {
                if state.token_ref() != *filter {
                    continue;
                }
            }
            self.sync_token_auras(state, tokens, opts)?;
        }
        self.test_collisions(tokens, opts);
        Ok(())
    }

    /// Position and visibility refresh only; no geometry or containment
    /// work. Safe to call every tick while a token animates.
    pub fn update_presentation(&mut self, tokens: &[TokenState], token: Option<&TokenRef>) {
        for state in tokens {
            let state_ref = state.token_ref();
            if let Some(filter) = token {
                if state_ref != *filter {
                    continue;
                }
            }
            let position = state.test_position(true);
            for aura in self.registry.token_auras_mut(&state_ref) {
                aura.update_position(position);
                aura.update_visibility(state);
            }
        }
    }

    /// Re-tests containment for every pair involving the token, both as an
    /// aura owner and as a target.
    pub fn test_collisions_for_token(
        &mut self,
        token: &TokenRef,
        tokens: &[TokenState],
        opts: &UpdateOptions,
    ) {
        let opts = UpdateOptions {
            token: Some(token.clone()),
            ..opts.clone()
        };
        self.test_collisions(tokens, &opts);
    }

    /// Removes a token, firing a leave for every containment pair it was
    /// part of so listeners never observe residual state. During teardown
    /// the leaves are skipped.
    pub fn destroy_token(&mut self, token: &TokenRef, tokens: &[TokenState], user_id: Option<&str>) {
        if !self.tearing_down {
            let user = user_id
                .map(str::to_string)
                .or_else(|| self.options.user_id.clone());

            let owned: Vec<AuraRef> = self
                .registry
                .get_token_auras(token)
                .iter()
                .map(|a| token.aura(&a.config().id))
                .collect();
            for aura_ref in owned {
                self.remove_aura_with_leave(&aura_ref, tokens, false, user.clone());
            }

            for aura_ref in self.registry.auras_containing_token(token) {
                if self.registry.set_is_inside(token, &aura_ref, false) {
                    if let Some(config) = self.registry.get_aura(&aura_ref).map(|a| a.config().clone())
                    {
                        let event = TransitionEvent {
                            token: token.clone(),
                            owner: aura_ref.owner.clone(),
                            aura: config,
                            has_entered: false,
                            is_preview: token.is_preview || aura_ref.owner.is_preview,
                            is_initial: false,
                            user_id: user.clone(),
                        };
                        let target = find_token(tokens, token);
                        self.dispatch(event, target);
                    }
                }
            }
        }
        self.registry.deregister_token(token);
    }

    /// Marks the scene as going away. Subsequent destroys fire no leave
    /// events.
    pub fn teardown(&mut self) {
        self.tearing_down = true;
    }

    fn sync_token_auras(
        &mut self,
        state: &TokenState,
        tokens: &[TokenState],
        opts: &UpdateOptions,
    ) -> Result<(), GeometryError> {
        let token = state.token_ref();
        let gridless = self.grid.topology == GridTopology::Gridless;

        // Deregister auras no longer in the config list, firing leaves.
        let stale: Vec<AuraRef> = self
            .registry
            .get_token_auras(&token)
            .iter()
            .filter(|a| gridless || !state.auras.iter().any(|c| c.id == a.config().id))
            .map(|a| token.aura(&a.config().id))
            .collect();
        for aura_ref in stale {
            let user = self.effective_user(opts);
            self.remove_aura_with_leave(&aura_ref, tokens, opts.is_initial, user);
        }

        if gridless {
            return Ok(());
        }

        let heavy = self.orientation.is_heavy(state);
        let position = state.test_position(opts.use_live_position);
        for config in &state.auras {
            let aura_ref = token.aura(&config.id);
            if !self.registry.has_aura(&aura_ref) {
                self.registry.register_aura(&token, Aura::new(config.clone()));
            }
            if let Some(aura) = self.registry.get_aura_mut(&aura_ref) {
                aura.update(config, state, self.grid, self.options.square_mode, heavy, opts.force)?;
                aura.update_position(position);
                aura.update_visibility(state);
            }
        }
        Ok(())
    }

    fn test_collisions(&mut self, tokens: &[TokenState], opts: &UpdateOptions) {
        for aura_ref in self.registry.aura_refs() {
            for target in tokens {
                let target_ref = target.token_ref();
                // A token cannot enter its own aura; raw ids, so a drag
                // preview is never tested against its committed copy either.
                if target_ref.id == aura_ref.owner.id {
                    continue;
                }
                if let Some(filter) = &opts.token {
                    if aura_ref.owner != *filter && target_ref != *filter {
                        continue;
                    }
                }

                let Some(aura) = self.registry.get_aura(&aura_ref) else {
                    continue;
                };
                let base = target.test_position(opts.use_live_position);
                let is_in = self
                    .sample_points(target)
                    .iter()
                    .any(|p| aura.is_inside(Point::new(base.x + p.x, base.y + p.y)));

                if self.registry.set_is_inside(&target_ref, &aura_ref, is_in) {
                    if let Some(config) = self.registry.get_aura(&aura_ref).map(|a| a.config().clone())
                    {
                        let event = TransitionEvent {
                            token: target_ref.clone(),
                            owner: aura_ref.owner.clone(),
                            aura: config,
                            has_entered: is_in,
                            is_preview: target_ref.is_preview || aura_ref.owner.is_preview,
                            is_initial: opts.is_initial,
                            user_id: self.effective_user(opts),
                        };
                        self.dispatch(event, Some(target));
                    }
                }
            }
        }
    }

    /// Sample points standing in for the token, in token-local space.
    fn sample_points(&self, token: &TokenState) -> Vec<Point> {
        match self.grid.topology {
            GridTopology::Gridless => Vec::new(),
            GridTopology::Square => {
                sampling::square_points_under_token(self.grid.size, token.width, token.height)
            }
            GridTopology::HexColumns | GridTopology::HexRows => {
                if token.width != token.height || token.width.fract() != 0.0 || token.width < 1.0 {
                    return Vec::new();
                }
                sampling::hex_points_under_token(
                    self.grid.size,
                    self.grid.topology.is_column_hex(),
                    token.width as u32,
                    self.orientation.is_heavy(token),
                )
            }
        }
    }

    /// Fires leaves for every token inside the aura, then deregisters it.
    fn remove_aura_with_leave(
        &mut self,
        aura_ref: &AuraRef,
        tokens: &[TokenState],
        is_initial: bool,
        user_id: Option<String>,
    ) {
        if let Some(config) = self.registry.get_aura(aura_ref).map(|a| a.config().clone()) {
            for target in self.registry.tokens_inside_aura(aura_ref) {
                if self.registry.set_is_inside(&target, aura_ref, false) {
                    let event = TransitionEvent {
                        token: target.clone(),
                        owner: aura_ref.owner.clone(),
                        aura: config.clone(),
                        has_entered: false,
                        is_preview: target.is_preview || aura_ref.owner.is_preview,
                        is_initial,
                        user_id: user_id.clone(),
                    };
                    let state = find_token(tokens, &target);
                    self.dispatch(event, state);
                }
            }
        }
        self.registry.deregister_aura(aura_ref);
    }

    fn dispatch(&mut self, event: TransitionEvent, target: Option<&TokenState>) {
        tracing::debug!(
            token = %event.token,
            aura = %event.aura.id,
            entered = event.has_entered,
            "containment transition"
        );
        for handler in &mut self.handlers {
            handler.on_transition(&event);
        }
        self.apply_effect(&event, target);
        self.run_macro(&event);
    }

    fn apply_effect(&mut self, event: &TransitionEvent, target: Option<&TokenState>) {
        if !self.options.effect_automation || event.is_initial || event.is_preview {
            return;
        }
        // One client acts per transition: the one whose user instigated it.
        if event.user_id != self.options.user_id {
            return;
        }
        let Some(effect_id) = event.aura.effect.effect_id.as_deref() else {
            return;
        };
        let Some(state) = target else {
            return;
        };
        if !state.matches_target(event.aura.effect.target_tokens) {
            return;
        }

        if !event.has_entered {
            // Leave only removes the effect when no other aura still
            // containing the token grants the same one.
            let still_granted = self
                .registry
                .auras_containing_token(&event.token)
                .iter()
                .any(|aura_ref| {
                    self.registry.get_aura(aura_ref).is_some_and(|a| {
                        a.config().effect.effect_id.as_deref() == Some(effect_id)
                    })
                });
            if still_granted {
                return;
            }
        }

        if let Some(toggler) = &mut self.effect_toggler {
            toggler.set_effect(
                &event.token,
                effect_id,
                event.has_entered,
                event.aura.effect.is_overlay,
            );
        }
    }

    fn run_macro(&mut self, event: &TransitionEvent) {
        if !self.options.macro_automation {
            return;
        }
        let Some(macro_id) = event.aura.macro_.macro_id.as_deref() else {
            return;
        };
        let Some(runner) = &mut self.macro_runner else {
            return;
        };
        if let Err(error) = runner.run(macro_id, event) {
            tracing::warn!(%macro_id, %error, "aura macro failed");
        }
    }

    fn effective_user(&self, opts: &UpdateOptions) -> Option<String> {
        opts.user_id
            .clone()
            .or_else(|| self.options.user_id.clone())
    }
}

fn find_token<'a>(tokens: &'a [TokenState], token: &TokenRef) -> Option<&'a TokenState> {
    tokens
        .iter()
        .find(|state| state.id == token.id && state.is_preview == token.is_preview)
}
