//! Save-blob codec for selection state
//!
//! The format interoperates with existing save records: only selected
//! entries are written, as `Name,True` pairs joined by `;`. Parsing is
//! lossy by design - unknown names and malformed fragments are dropped,
//! never fatal.

use crate::profession::{Profession, SelectionState};

/// Save field holding the serialized selection set
pub const SELECTIONS_FIELD: &str = "Professions Selections";

/// Save field holding the unix time of the last profession change
pub const LAST_CHANGE_FIELD: &str = "Professions LastProfessionChange";

/// Serialize the selected entries of a state.
///
/// Emits declaration order, so the output is deterministic for a given
/// selection set. Unselected professions are never represented.
pub fn serialize(state: &SelectionState) -> String {
    state
        .selected()
        .iter()
        .map(|p| format!("{},True", p.name()))
        .collect::<Vec<_>>()
        .join(";")
}

/// Parse a selection blob into a fresh state.
///
/// Fragments without exactly two components are skipped; unknown
/// profession names are dropped; the boolean is parsed case-insensitively
/// and anything unrecognized reads as false.
pub fn deserialize(blob: &str) -> SelectionState {
    let mut state = SelectionState::new();

    for fragment in blob.split(';') {
        let parts: Vec<&str> = fragment.split(',').collect();
        if parts.len() != 2 {
            continue;
        }
        let Some(profession) = Profession::from_name(parts[0].trim()) else {
            continue;
        };
        let value = parts[1].trim().eq_ignore_ascii_case("true");
        state.set(profession, value);
    }

    state
}
