//! Session configuration
//!
//! All tunables for the profession system live here. On a dedicated server
//! these values are authoritative and pushed to clients; `ConfigUpdate`
//! carries an admin-issued change.

use crate::profession::{Profession, ProfessionPolicy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Configuration for the profession system
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfessionConfig {
    /// Maximum number of professions a player may have selected at once (1-5)
    pub max_allowed: u32,

    /// Whether players may unselect a profession and pick another
    pub allow_unselect: bool,

    /// Time between profession changes, in real-time hours. 0 disables the
    /// cooldown entirely. Only consulted when `allow_unselect` is on.
    pub change_cooldown_hours: f32,

    /// Minimum skill progress (percent, 0-100) below which unselected
    /// professions still gain experience. 0 means unselected professions
    /// are gated from the start.
    pub min_unselected_threshold: f32,

    /// Key binding that opens the profession panel
    pub panel_hotkey: String,

    /// Per-profession policy overrides. Professions not listed here use
    /// [`ProfessionPolicy::BlockExperience`].
    pub policies: HashMap<Profession, ProfessionPolicy>,
}

impl Default for ProfessionConfig {
    fn default() -> Self {
        Self {
            max_allowed: 1,
            allow_unselect: false,
            change_cooldown_hours: 0.0,
            min_unselected_threshold: 0.0,
            panel_hotkey: "P".to_string(),
            policies: HashMap::new(),
        }
    }
}

impl ProfessionConfig {
    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=5).contains(&self.max_allowed) {
            return Err(format!(
                "max_allowed ({}) must be between 1 and 5",
                self.max_allowed
            ));
        }

        if !(0.0..=100.0).contains(&self.min_unselected_threshold) {
            return Err(format!(
                "min_unselected_threshold ({}) must be between 0 and 100",
                self.min_unselected_threshold
            ));
        }

        if self.change_cooldown_hours < 0.0 {
            return Err(format!(
                "change_cooldown_hours ({}) must not be negative",
                self.change_cooldown_hours
            ));
        }

        Ok(())
    }

    /// Cooldown between profession changes, in whole seconds
    pub fn cooldown_secs(&self) -> i64 {
        (self.change_cooldown_hours * 3600.0) as i64
    }

    /// Merge an admin-issued update into this configuration.
    ///
    /// Numeric fields are clamped to their accepted ranges rather than
    /// rejected, mirroring how the server treats out-of-range console input.
    pub fn apply(&mut self, update: &ConfigUpdate) {
        if let Some(max) = update.max_allowed {
            self.max_allowed = max.clamp(1, 5);
        }
        if let Some(allow) = update.allow_unselect {
            self.allow_unselect = allow;
        }
        if let Some(hours) = update.change_cooldown_hours {
            self.change_cooldown_hours = hours.max(0.0);
        }
        if let Some(threshold) = update.min_unselected_threshold {
            self.min_unselected_threshold = threshold.clamp(0.0, 100.0);
        }
        for (profession, policy) in &update.policies {
            self.policies.insert(*profession, *policy);
        }
    }
}

/// A configuration change issued by a session admin.
///
/// Only the fields present are applied; the transport (server to clients)
/// is the host's concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigUpdate {
    pub max_allowed: Option<u32>,
    pub allow_unselect: Option<bool>,
    pub change_cooldown_hours: Option<f32>,
    pub min_unselected_threshold: Option<f32>,
    #[serde(default)]
    pub policies: Vec<(Profession, ProfessionPolicy)>,
}

/// Load and validate a configuration from a TOML file
pub fn load_config(path: &Path) -> crate::core::error::Result<ProfessionConfig> {
    let content = fs::read_to_string(path)?;
    let config: ProfessionConfig = toml::from_str(&content)?;
    config
        .validate()
        .map_err(crate::core::error::ProfessionError::InvalidConfig)?;
    Ok(config)
}
