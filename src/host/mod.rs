//! Host skill provider capability
//!
//! The surrounding game owns skill progress and the per-player save store.
//! The core only ever touches them through this trait, never through
//! concrete host types.

use crate::profession::Profession;
use std::collections::HashMap;

/// Abstract access to the host's skill and save-field storage.
///
/// Skill progress is the host's 0-100 factor scale throughout; the
/// conversion helpers below cover callers that need the 0-1 or level form.
pub trait SkillProvider {
    /// Current skill progress for a profession (0-100)
    fn get_progress(&self, profession: Profession) -> f32;

    /// Overwrite skill progress for a profession (clamped to 0-100)
    fn set_progress(&mut self, profession: Profession, value: f32);

    /// Read an opaque per-player save field
    fn get_save_field(&self, key: &str) -> Option<String>;

    /// Write an opaque per-player save field
    fn set_save_field(&mut self, key: &str, value: String);
}

/// Convert a percent threshold to a 0-1 progress fraction
pub fn percent_to_fraction(percent: f32) -> f32 {
    (percent / 100.0).clamp(0.0, 1.0)
}

/// Convert a percent threshold to a skill level on the 0-100 scale
pub fn percent_to_level(percent: f32) -> f32 {
    percent.clamp(0.0, 100.0)
}

/// In-memory provider used by tests and the demo driver
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    progress: HashMap<Profession, f32>,
    save_fields: HashMap<String, String>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SkillProvider for MemoryHost {
    fn get_progress(&self, profession: Profession) -> f32 {
        self.progress.get(&profession).copied().unwrap_or(0.0)
    }

    fn set_progress(&mut self, profession: Profession, value: f32) {
        self.progress.insert(profession, value.clamp(0.0, 100.0));
    }

    fn get_save_field(&self, key: &str) -> Option<String> {
        self.save_fields.get(key).cloned()
    }

    fn set_save_field(&mut self, key: &str, value: String) {
        self.save_fields.insert(key.to_string(), value);
    }
}
