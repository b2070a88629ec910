//! Profession selection core
//!
//! A player selects a bounded number of professions; experience gain and
//! skill usage in unselected professions is blocked according to a
//! per-profession policy. Selection changes, gating, serialization and the
//! legacy migration all live here; the host's skill storage is reached
//! through [`crate::host::SkillProvider`].

pub mod blob;
pub mod gate;
pub mod migration;
pub mod registry;
pub mod selection;

pub use blob::{deserialize, serialize, LAST_CHANGE_FIELD, SELECTIONS_FIELD};
pub use gate::{is_allowed, is_allowed_for, GateEvent};
pub use migration::migrate_legacy;
pub use registry::{PolicyMap, Profession, ProfessionInfo, ProfessionPolicy, PROFESSION_REGISTRY};
pub use selection::{toggle, SelectionState, ToggleOutcome, ToggleParams};
