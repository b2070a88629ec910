//! One-time migration from legacy per-skill records
//!
//! Older player records carry no explicit selection blob; the selection
//! was implicit in which profession skills had any level. On first load
//! the highest-leveled professions become the selection, which the caller
//! persists immediately so this runs exactly once per record.

use crate::host::SkillProvider;
use crate::profession::{Profession, SelectionState};

/// Derive a selection set from legacy skill levels.
///
/// Picks the `max_allowed` professions with the highest skill progress via
/// a bounded top-K insertion (K is at most 5, a sort is not worth it).
/// Ties go to the earlier-declared profession. Professions with no
/// progress are not candidates, and a picked profession is only selected
/// when its progress exceeds `min_threshold` (percent, 0-100).
pub fn migrate_legacy(
    provider: &dyn SkillProvider,
    max_allowed: u32,
    min_threshold: f32,
) -> SelectionState {
    let k = max_allowed.clamp(1, 5) as usize;
    let mut top: Vec<(Profession, f32)> = Vec::with_capacity(k);

    for profession in Profession::ALL {
        let level = provider.get_progress(profession);
        if level <= 0.0 {
            continue;
        }

        // Strictly-greater comparison keeps earlier-declared winners in
        // place on ties.
        let pos = top
            .iter()
            .position(|&(_, l)| level > l)
            .unwrap_or(top.len());
        if pos < k {
            top.insert(pos, (profession, level));
            top.truncate(k);
        }
    }

    let mut state = SelectionState::new();
    for (profession, level) in &top {
        if *level > min_threshold {
            state.set(*profession, true);
        }
    }

    if state.selected_count() > 0 {
        tracing::warn!(
            "upgrading highest skills into profession selections: {:?}",
            state.selected()
        );
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;

    #[test]
    fn test_selects_top_k_by_level() {
        let mut host = MemoryHost::new();
        host.set_progress(Profession::Mining, 40.0);
        host.set_progress(Profession::Sailing, 10.0);
        host.set_progress(Profession::Cooking, 0.0);

        let state = migrate_legacy(&host, 2, 0.0);
        assert_eq!(
            state.selected(),
            vec![Profession::Mining, Profession::Sailing]
        );
    }

    #[test]
    fn test_empty_record_selects_nothing() {
        let host = MemoryHost::new();
        let state = migrate_legacy(&host, 3, 0.0);
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_tie_goes_to_earlier_declared() {
        let mut host = MemoryHost::new();
        // Building is declared before Mining
        host.set_progress(Profession::Mining, 30.0);
        host.set_progress(Profession::Building, 30.0);

        let state = migrate_legacy(&host, 1, 0.0);
        assert_eq!(state.selected(), vec![Profession::Building]);
    }

    #[test]
    fn test_threshold_excludes_low_levels() {
        let mut host = MemoryHost::new();
        host.set_progress(Profession::Mining, 40.0);
        host.set_progress(Profession::Sailing, 10.0);

        let state = migrate_legacy(&host, 2, 15.0);
        assert_eq!(state.selected(), vec![Profession::Mining]);
    }

    #[test]
    fn test_respects_capacity() {
        let mut host = MemoryHost::new();
        for (i, profession) in Profession::ALL.iter().enumerate() {
            host.set_progress(*profession, (i + 1) as f32);
        }

        let state = migrate_legacy(&host, 5, 0.0);
        assert_eq!(state.selected_count(), 5);
        // Highest levels are the later-declared professions here
        assert!(state.is_selected(Profession::Exploration));
        assert!(!state.is_selected(Profession::Blacksmithing));
    }
}
