//! Experience and usage gating
//!
//! Evaluated once per progress-grant or action attempt from the host.
//! Side-effect free and O(1).

use crate::profession::{PolicyMap, Profession, ProfessionPolicy, SelectionState};

/// The host event kind being gated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    /// The skill is about to be granted experience
    ExperienceGain,
    /// The player is about to perform the action behind the skill
    SkillUse,
}

impl ProfessionPolicy {
    /// Whether this policy gates the given event kind when unselected.
    ///
    /// Blocking usage implies blocking experience: an action that cannot be
    /// performed never grants any.
    pub fn blocks(&self, event: GateEvent) -> bool {
        match (self, event) {
            (ProfessionPolicy::Ignored, _) => false,
            (ProfessionPolicy::BlockExperience, GateEvent::ExperienceGain) => true,
            (ProfessionPolicy::BlockExperience, GateEvent::SkillUse) => false,
            (ProfessionPolicy::BlockUsage, _) => true,
        }
    }
}

/// Whether experience/usage is permitted for a profession.
///
/// Permitted when the policy is [`ProfessionPolicy::Ignored`], when the
/// profession is selected, or when `skill_factor` (0-100) is still below
/// `min_threshold` - early progress is never locked out.
pub fn is_allowed(
    profession: Profession,
    state: &SelectionState,
    policies: &PolicyMap,
    skill_factor: f32,
    min_threshold: f32,
) -> bool {
    if policies.get(profession) == ProfessionPolicy::Ignored {
        return true;
    }
    if state.is_selected(profession) {
        return true;
    }
    skill_factor >= 0.0 && skill_factor < min_threshold
}

/// Event-aware variant of [`is_allowed`]: a policy that does not gate the
/// event kind at all (e.g. BlockExperience during a usage attempt) always
/// permits it.
pub fn is_allowed_for(
    event: GateEvent,
    profession: Profession,
    state: &SelectionState,
    policies: &PolicyMap,
    skill_factor: f32,
    min_threshold: f32,
) -> bool {
    if !policies.get(profession).blocks(event) {
        return true;
    }
    if state.is_selected(profession) {
        return true;
    }
    skill_factor >= 0.0 && skill_factor < min_threshold
}
