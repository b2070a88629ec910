//! Selection panel view-model
//!
//! Converts session state into display-ready rows and messages. Pure read
//! model: the actual widgets belong to the host.

use crate::core::config::ProfessionConfig;
use crate::profession::{
    PolicyMap, Profession, ProfessionPolicy, SelectionState, ToggleOutcome,
};

/// One panel entry for a non-ignored profession
#[derive(Debug, Clone)]
pub struct PanelRow {
    pub profession: Profession,
    pub name: &'static str,
    pub description: &'static str,
    pub policy: ProfessionPolicy,
    pub selected: bool,
    /// Whether the select action should be enabled for this row
    pub selectable: bool,
}

/// Display-ready panel state
#[derive(Debug, Clone)]
pub struct PanelView {
    pub rows: Vec<PanelRow>,
    pub status_line: String,
}

/// Build the panel for the current selection.
///
/// Ignored professions are hidden. Selected rows stay actionable (for
/// deselection); unselected rows grey out once the player is at capacity.
pub fn build_panel(
    state: &SelectionState,
    policies: &PolicyMap,
    config: &ProfessionConfig,
) -> PanelView {
    let count = state.selected_count();
    let at_capacity = count >= config.max_allowed as usize;

    let rows = Profession::ALL
        .iter()
        .filter(|p| policies.get(**p) != ProfessionPolicy::Ignored)
        .map(|p| {
            let selected = state.is_selected(*p);
            PanelRow {
                profession: *p,
                name: p.name(),
                description: p.description(),
                policy: policies.get(*p),
                selected,
                selectable: selected || !at_capacity,
            }
        })
        .collect();

    let cooldown = if config.allow_unselect && config.cooldown_secs() > 0 {
        format!(" every {}", format_duration(config.cooldown_secs()))
    } else {
        String::new()
    };
    let status_line = format!(
        "You have {} / {} professions selected.\nYou are{} allowed to change your professions{}.",
        count,
        config.max_allowed,
        if config.allow_unselect { "" } else { " not" },
        cooldown,
    );

    PanelView { rows, status_line }
}

/// User-facing message for a toggle attempt, if the outcome warrants one
pub fn toggle_message(outcome: &ToggleOutcome) -> Option<String> {
    match outcome {
        ToggleOutcome::Selected | ToggleOutcome::Deselected => None,
        ToggleOutcome::CapacityExceeded => {
            Some("You cannot select any more professions.".to_string())
        }
        ToggleOutcome::ChangeDisabled => {
            Some("You are not allowed to change your professions.".to_string())
        }
        ToggleOutcome::CooldownActive { remaining_secs } => Some(format!(
            "You can change your profession in {}.",
            format_duration(*remaining_secs)
        )),
    }
}

/// Human-friendly duration, largest two units only ("2d 5h", "3h 12m", "45s")
pub fn format_duration(secs: i64) -> String {
    let secs = secs.max(0);
    let days = secs / 86400;
    let hours = (secs % 86400) / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
