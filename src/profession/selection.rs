//! Per-player selection state and the toggle state machine
//!
//! The selected-count invariant (never above the configured maximum) is
//! enforced here and only here; callers route every change through
//! [`toggle`].

use crate::host::SkillProvider;
use crate::profession::Profession;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The set of professions currently active for one player.
///
/// Absent entries mean "not selected"; only the toggle operation and the
/// load/migration paths mutate this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    selected: HashMap<Profession, bool>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a profession is currently selected
    pub fn is_selected(&self, profession: Profession) -> bool {
        self.selected.get(&profession).copied().unwrap_or(false)
    }

    /// Set a selection flag directly. Deserialization and migration use
    /// this; gameplay code goes through [`toggle`] so the capacity
    /// invariant holds.
    pub fn set(&mut self, profession: Profession, value: bool) {
        self.selected.insert(profession, value);
    }

    /// Number of currently selected professions
    pub fn selected_count(&self) -> usize {
        self.selected.values().filter(|v| **v).count()
    }

    /// Selected professions in declaration order
    pub fn selected(&self) -> Vec<Profession> {
        Profession::ALL
            .iter()
            .copied()
            .filter(|p| self.is_selected(*p))
            .collect()
    }
}

/// Everything the toggle operation needs besides the state itself
#[derive(Debug, Clone, Copy)]
pub struct ToggleParams {
    /// Maximum number of simultaneously selected professions
    pub max_allowed: u32,
    /// Whether deselecting is permitted at all
    pub allow_unselect: bool,
    /// Seconds between profession changes; 0 disables the cooldown
    pub cooldown_secs: i64,
    /// Minimum retained progress for unselected professions (percent, 0-100)
    pub min_unselected_threshold: f32,
    /// Current server time (unix seconds)
    pub now_unix: i64,
    /// Server time of this player's last profession change, if any
    pub last_change_unix: Option<i64>,
}

/// Result of a toggle attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The profession is now selected
    Selected,
    /// The profession is now deselected
    Deselected,
    /// Already at the maximum; nothing changed
    CapacityExceeded,
    /// Unselecting is disabled; nothing changed
    ChangeDisabled,
    /// The change cooldown has not elapsed; nothing changed
    CooldownActive { remaining_secs: i64 },
}

impl ToggleOutcome {
    /// Whether the attempt changed the selection state
    pub fn changed(&self) -> bool {
        matches!(self, ToggleOutcome::Selected | ToggleOutcome::Deselected)
    }
}

/// Toggle a profession for a player.
///
/// Selecting: refused when at capacity (a safe no-op, the panel should have
/// prevented it). A skill with zero progress is bumped to level 1 so the
/// host's own systems treat it as active. No cooldown applies.
///
/// Deselecting: refused when unselecting is disabled or the cooldown has
/// not elapsed. On success the skill progress is reset to zero, or clamped
/// down to the retained-minimum level when a threshold is configured. The
/// caller records the change time on [`ToggleOutcome::Deselected`].
pub fn toggle(
    state: &mut SelectionState,
    profession: Profession,
    params: ToggleParams,
    provider: &mut dyn SkillProvider,
) -> ToggleOutcome {
    if state.is_selected(profession) {
        if !params.allow_unselect {
            return ToggleOutcome::ChangeDisabled;
        }

        if params.cooldown_secs > 0 {
            if let Some(last_change) = params.last_change_unix {
                let remaining = last_change + params.cooldown_secs - params.now_unix;
                if remaining > 0 {
                    return ToggleOutcome::CooldownActive {
                        remaining_secs: remaining,
                    };
                }
            }
        }

        let threshold = params.min_unselected_threshold;
        if threshold > 0.0 {
            if provider.get_progress(profession) > threshold {
                provider.set_progress(profession, threshold.clamp(0.0, 100.0));
            }
            // progress already at or below the retained minimum: keep it
        } else {
            provider.set_progress(profession, 0.0);
        }

        state.set(profession, false);
        ToggleOutcome::Deselected
    } else {
        if state.selected_count() >= params.max_allowed as usize {
            return ToggleOutcome::CapacityExceeded;
        }

        if provider.get_progress(profession) <= 0.0 {
            provider.set_progress(profession, 1.0);
        }

        state.set(profession, true);
        ToggleOutcome::Selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;

    fn params(max_allowed: u32) -> ToggleParams {
        ToggleParams {
            max_allowed,
            allow_unselect: true,
            cooldown_secs: 0,
            min_unselected_threshold: 0.0,
            now_unix: 0,
            last_change_unix: None,
        }
    }

    #[test]
    fn test_select_within_capacity() {
        let mut state = SelectionState::new();
        let mut host = MemoryHost::new();

        let outcome = toggle(&mut state, Profession::Mining, params(1), &mut host);
        assert_eq!(outcome, ToggleOutcome::Selected);
        assert!(state.is_selected(Profession::Mining));
        assert_eq!(state.selected_count(), 1);
    }

    #[test]
    fn test_select_beyond_capacity_is_noop() {
        let mut state = SelectionState::new();
        let mut host = MemoryHost::new();

        assert_eq!(
            toggle(&mut state, Profession::Mining, params(1), &mut host),
            ToggleOutcome::Selected
        );
        let before = state.clone();

        assert_eq!(
            toggle(&mut state, Profession::Sailing, params(1), &mut host),
            ToggleOutcome::CapacityExceeded
        );
        assert_eq!(state, before);
        assert_eq!(state.selected_count(), 1);
    }

    #[test]
    fn test_select_bumps_zero_progress() {
        let mut state = SelectionState::new();
        let mut host = MemoryHost::new();

        toggle(&mut state, Profession::Mining, params(1), &mut host);
        assert_eq!(host.get_progress(Profession::Mining), 1.0);
    }

    #[test]
    fn test_select_keeps_existing_progress() {
        let mut state = SelectionState::new();
        let mut host = MemoryHost::new();
        host.set_progress(Profession::Mining, 42.0);

        toggle(&mut state, Profession::Mining, params(1), &mut host);
        assert_eq!(host.get_progress(Profession::Mining), 42.0);
    }

    #[test]
    fn test_deselect_disabled_leaves_state_unchanged() {
        let mut state = SelectionState::new();
        let mut host = MemoryHost::new();
        toggle(&mut state, Profession::Mining, params(1), &mut host);

        let mut p = params(1);
        p.allow_unselect = false;
        let before = state.clone();

        assert_eq!(
            toggle(&mut state, Profession::Mining, p, &mut host),
            ToggleOutcome::ChangeDisabled
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_deselect_resets_progress() {
        let mut state = SelectionState::new();
        let mut host = MemoryHost::new();
        host.set_progress(Profession::Mining, 60.0);
        toggle(&mut state, Profession::Mining, params(1), &mut host);

        assert_eq!(
            toggle(&mut state, Profession::Mining, params(1), &mut host),
            ToggleOutcome::Deselected
        );
        assert!(!state.is_selected(Profession::Mining));
        assert_eq!(host.get_progress(Profession::Mining), 0.0);
    }

    #[test]
    fn test_deselect_clamps_to_retained_threshold() {
        let mut state = SelectionState::new();
        let mut host = MemoryHost::new();
        host.set_progress(Profession::Mining, 60.0);
        toggle(&mut state, Profession::Mining, params(1), &mut host);

        let mut p = params(1);
        p.min_unselected_threshold = 25.0;
        toggle(&mut state, Profession::Mining, p, &mut host);

        assert_eq!(host.get_progress(Profession::Mining), 25.0);
    }

    #[test]
    fn test_deselect_below_threshold_keeps_progress() {
        let mut state = SelectionState::new();
        let mut host = MemoryHost::new();
        host.set_progress(Profession::Mining, 10.0);
        toggle(&mut state, Profession::Mining, params(1), &mut host);

        let mut p = params(1);
        p.min_unselected_threshold = 25.0;
        toggle(&mut state, Profession::Mining, p, &mut host);

        assert_eq!(host.get_progress(Profession::Mining), 10.0);
    }

    #[test]
    fn test_cooldown_blocks_deselect() {
        let mut state = SelectionState::new();
        let mut host = MemoryHost::new();
        toggle(&mut state, Profession::Mining, params(1), &mut host);

        let mut p = params(1);
        p.cooldown_secs = 3600;
        p.last_change_unix = Some(1000);
        p.now_unix = 2000;

        assert_eq!(
            toggle(&mut state, Profession::Mining, p, &mut host),
            ToggleOutcome::CooldownActive {
                remaining_secs: 2600
            }
        );
        assert!(state.is_selected(Profession::Mining));
    }

    #[test]
    fn test_cooldown_elapsed_allows_deselect() {
        let mut state = SelectionState::new();
        let mut host = MemoryHost::new();
        toggle(&mut state, Profession::Mining, params(1), &mut host);

        let mut p = params(1);
        p.cooldown_secs = 3600;
        p.last_change_unix = Some(1000);
        p.now_unix = 5000;

        assert_eq!(
            toggle(&mut state, Profession::Mining, p, &mut host),
            ToggleOutcome::Deselected
        );
    }

    #[test]
    fn test_no_cooldown_check_on_select() {
        let mut state = SelectionState::new();
        let mut host = MemoryHost::new();

        let mut p = params(1);
        p.cooldown_secs = 3600;
        p.last_change_unix = Some(1000);
        p.now_unix = 1001;

        assert_eq!(
            toggle(&mut state, Profession::Mining, p, &mut host),
            ToggleOutcome::Selected
        );
    }

    #[test]
    fn test_no_cooldown_without_prior_change() {
        let mut state = SelectionState::new();
        let mut host = MemoryHost::new();
        toggle(&mut state, Profession::Mining, params(1), &mut host);

        let mut p = params(1);
        p.cooldown_secs = 3600;
        p.last_change_unix = None;
        p.now_unix = 0;

        assert_eq!(
            toggle(&mut state, Profession::Mining, p, &mut host),
            ToggleOutcome::Deselected
        );
    }
}
