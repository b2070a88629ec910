//! Per-player session wiring
//!
//! Connects the selection state machine to the host: load (with one-time
//! legacy migration), save, toggle, and gate evaluation.

pub mod clock;

pub use clock::{respond, ClockSyncRequest, ClockSyncResponse, ServerClock};

use crate::core::config::{ConfigUpdate, ProfessionConfig};
use crate::host::SkillProvider;
use crate::profession::{
    self, GateEvent, PolicyMap, Profession, SelectionState, ToggleOutcome, ToggleParams,
    LAST_CHANGE_FIELD, SELECTIONS_FIELD,
};

/// One player's profession session.
///
/// All operations run synchronously on the host's main simulation thread;
/// this type is a single-owner value and has no interior locking. A
/// multi-threaded host must serialize access itself (put the session
/// behind a mutex or a single-owner actor).
#[derive(Debug)]
pub struct ProfessionSession {
    config: ProfessionConfig,
    policies: PolicyMap,
    state: SelectionState,
    last_change_unix: Option<i64>,
    clock: ServerClock,
}

impl ProfessionSession {
    pub fn new(config: ProfessionConfig) -> Self {
        let policies = PolicyMap::from_overrides(&config.policies);
        Self {
            config,
            policies,
            state: SelectionState::new(),
            last_change_unix: None,
            clock: ServerClock::new(),
        }
    }

    pub fn config(&self) -> &ProfessionConfig {
        &self.config
    }

    pub fn policies(&self) -> &PolicyMap {
        &self.policies
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn clock(&self) -> &ServerClock {
        &self.clock
    }

    /// Apply an admin-issued configuration change
    pub fn apply_config_update(&mut self, update: &ConfigUpdate) {
        self.config.apply(update);
        self.policies = PolicyMap::from_overrides(&self.config.policies);
        tracing::info!("configuration updated: {:?}", update);
    }

    /// Fold a clock sync response into the cached server time
    pub fn sync_clock(&mut self, response: &ClockSyncResponse, local_now_unix: i64) {
        self.clock.apply_response(response, local_now_unix);
    }

    /// Load selection state from the player record.
    ///
    /// Records without an explicit selection blob are migrated from legacy
    /// skill levels, and the result is persisted immediately so migration
    /// runs exactly once per record.
    pub fn load(&mut self, provider: &mut dyn SkillProvider) {
        if let Some(blob) = provider.get_save_field(SELECTIONS_FIELD) {
            self.state = profession::deserialize(&blob);
            tracing::debug!(
                "loaded {} selected professions",
                self.state.selected_count()
            );
        } else {
            self.state = profession::migrate_legacy(
                provider,
                self.config.max_allowed,
                self.config.min_unselected_threshold,
            );
            provider.set_save_field(SELECTIONS_FIELD, profession::serialize(&self.state));
        }

        self.last_change_unix = provider
            .get_save_field(LAST_CHANGE_FIELD)
            .and_then(|raw| raw.parse().ok());
    }

    /// Write selection state into the player record
    pub fn save(&self, provider: &mut dyn SkillProvider) {
        provider.set_save_field(SELECTIONS_FIELD, profession::serialize(&self.state));
        if let Some(last_change) = self.last_change_unix {
            provider.set_save_field(LAST_CHANGE_FIELD, last_change.to_string());
        }
    }

    /// Toggle a profession and persist the result.
    ///
    /// `local_now_unix` is the local wall clock; the cooldown is evaluated
    /// against the synchronized server clock.
    pub fn toggle(
        &mut self,
        provider: &mut dyn SkillProvider,
        target: Profession,
        local_now_unix: i64,
    ) -> ToggleOutcome {
        let now = self.clock.now(local_now_unix);
        let params = ToggleParams {
            max_allowed: self.config.max_allowed,
            allow_unselect: self.config.allow_unselect,
            cooldown_secs: self.config.cooldown_secs(),
            min_unselected_threshold: self.config.min_unselected_threshold,
            now_unix: now,
            last_change_unix: self.last_change_unix,
        };

        let outcome = profession::toggle(&mut self.state, target, params, provider);

        if outcome == ToggleOutcome::Deselected {
            self.last_change_unix = Some(now);
        }
        if outcome.changed() {
            self.save(provider);
            tracing::info!("{:?} for {:?}", outcome, target);
        }

        outcome
    }

    /// Whether an experience grant for this profession should go through
    pub fn experience_allowed(&self, provider: &dyn SkillProvider, target: Profession) -> bool {
        profession::is_allowed_for(
            GateEvent::ExperienceGain,
            target,
            &self.state,
            &self.policies,
            provider.get_progress(target),
            self.config.min_unselected_threshold,
        )
    }

    /// Whether performing the skill's action should go through
    pub fn usage_allowed(&self, provider: &dyn SkillProvider, target: Profession) -> bool {
        profession::is_allowed_for(
            GateEvent::SkillUse,
            target,
            &self.state,
            &self.policies,
            provider.get_progress(target),
            self.config.min_unselected_threshold,
        )
    }
}
