//! Profession identifiers and per-profession policies
//!
//! The profession set is closed. Declaration order matters: legacy
//! migration breaks level ties in favor of earlier-declared professions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named category gating experience and usage for one skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Profession {
    Blacksmithing,
    Building,
    Cooking,
    Farming,
    Lumberjacking,
    Mining,
    Ranching,
    Sailing,
    Alchemy,
    Jewelcrafting,
    Foraging,
    Exploration,
}

impl Profession {
    /// All professions in declaration order
    pub const ALL: [Profession; 12] = [
        Profession::Blacksmithing,
        Profession::Building,
        Profession::Cooking,
        Profession::Farming,
        Profession::Lumberjacking,
        Profession::Mining,
        Profession::Ranching,
        Profession::Sailing,
        Profession::Alchemy,
        Profession::Jewelcrafting,
        Profession::Foraging,
        Profession::Exploration,
    ];

    /// Canonical name as it appears in the save blob
    pub fn name(&self) -> &'static str {
        match self {
            Profession::Blacksmithing => "Blacksmithing",
            Profession::Building => "Building",
            Profession::Cooking => "Cooking",
            Profession::Farming => "Farming",
            Profession::Lumberjacking => "Lumberjacking",
            Profession::Mining => "Mining",
            Profession::Ranching => "Ranching",
            Profession::Sailing => "Sailing",
            Profession::Alchemy => "Alchemy",
            Profession::Jewelcrafting => "Jewelcrafting",
            Profession::Foraging => "Foraging",
            Profession::Exploration => "Exploration",
        }
    }

    /// Resolve a profession from its canonical name
    pub fn from_name(s: &str) -> Option<Profession> {
        match s {
            "Blacksmithing" => Some(Profession::Blacksmithing),
            "Building" => Some(Profession::Building),
            "Cooking" => Some(Profession::Cooking),
            "Farming" => Some(Profession::Farming),
            "Lumberjacking" => Some(Profession::Lumberjacking),
            "Mining" => Some(Profession::Mining),
            "Ranching" => Some(Profession::Ranching),
            "Sailing" => Some(Profession::Sailing),
            "Alchemy" => Some(Profession::Alchemy),
            "Jewelcrafting" => Some(Profession::Jewelcrafting),
            "Foraging" => Some(Profession::Foraging),
            "Exploration" => Some(Profession::Exploration),
            _ => None,
        }
    }

    /// Human-readable description for the selection panel
    pub fn description(&self) -> &'static str {
        PROFESSION_REGISTRY
            .iter()
            .find(|info| info.profession == *self)
            .map(|info| info.description)
            .unwrap_or("")
    }
}

/// Enforcement mode for a profession when it is not selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfessionPolicy {
    /// Not treated as a profession; everyone may use and level the skill
    Ignored,
    /// Unselected players gain no experience for the skill
    BlockExperience,
    /// Unselected players cannot perform the actions that grant the skill
    BlockUsage,
}

impl ProfessionPolicy {
    /// Human-readable label for this policy
    pub fn label(&self) -> &'static str {
        match self {
            ProfessionPolicy::Ignored => "Ignored",
            ProfessionPolicy::BlockExperience => "Block Experience",
            ProfessionPolicy::BlockUsage => "Block Usage",
        }
    }
}

impl Default for ProfessionPolicy {
    fn default() -> Self {
        ProfessionPolicy::BlockExperience
    }
}

/// Static registry entry for one profession
#[derive(Debug, Clone)]
pub struct ProfessionInfo {
    pub profession: Profession,
    pub description: &'static str,
}

/// Global profession registry - static descriptions
pub static PROFESSION_REGISTRY: &[ProfessionInfo] = &[
    ProfessionInfo {
        profession: Profession::Blacksmithing,
        description: "A blacksmith uses the smelter and forge to smelt ore and craft armor and weapons.",
    },
    ProfessionInfo {
        profession: Profession::Building,
        description: "A builder uses the hammer to construct floors, walls and roofs for shelter.",
    },
    ProfessionInfo {
        profession: Profession::Cooking,
        description: "A cook creates lavish meals.",
    },
    ProfessionInfo {
        profession: Profession::Farming,
        description: "A farmer uses the cultivator to cultivate land to plant crops and harvest them.",
    },
    ProfessionInfo {
        profession: Profession::Lumberjacking,
        description: "A lumberjack uses an axe to cut trees to collect all kind of woods.",
    },
    ProfessionInfo {
        profession: Profession::Mining,
        description: "A miner uses a pickaxe to mine stone and ore.",
    },
    ProfessionInfo {
        profession: Profession::Ranching,
        description: "A rancher can tame certain animals and breed them for their meat.",
    },
    ProfessionInfo {
        profession: Profession::Sailing,
        description: "A sailor uses ships to explore the vast ocean and discover new islands.",
    },
    ProfessionInfo {
        profession: Profession::Alchemy,
        description: "An alchemist creates powerful potions, flasks and elixirs.",
    },
    ProfessionInfo {
        profession: Profession::Jewelcrafting,
        description: "A jeweler cuts powerful magic gems and adds sockets to equipment.",
    },
    ProfessionInfo {
        profession: Profession::Foraging,
        description: "A forager collects berries and mushrooms.",
    },
    ProfessionInfo {
        profession: Profession::Exploration,
        description: "An explorer explores the world and searches treasure chests.",
    },
];

/// Per-profession policy storage.
///
/// Every profession always has a policy; unset entries fall back to the
/// default. Mutable at runtime by a session admin.
#[derive(Debug, Clone, Default)]
pub struct PolicyMap {
    policies: HashMap<Profession, ProfessionPolicy>,
}

impl PolicyMap {
    /// Create a map where every profession uses the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map from configured overrides
    pub fn from_overrides(overrides: &HashMap<Profession, ProfessionPolicy>) -> Self {
        Self {
            policies: overrides.clone(),
        }
    }

    /// Policy for a profession (never fails; the set is closed)
    pub fn get(&self, profession: Profession) -> ProfessionPolicy {
        self.policies
            .get(&profession)
            .copied()
            .unwrap_or_default()
    }

    /// Set the policy for a profession
    pub fn set(&mut self, profession: Profession, policy: ProfessionPolicy) {
        self.policies.insert(profession, policy);
    }
}
