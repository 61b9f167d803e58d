//! Game mode and difficulty settings consulted while loading

use serde::{Deserialize, Serialize};

use crate::entity::{SpawnFlags, DEFAULT_MAX_CLIENTS, DEFAULT_MAX_ENTITIES};

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Easy,
    Medium,
    Hard,
    HardPlus,
}

impl Skill {
    /// Map a normalized skill value to a level
    pub fn from_value(value: f32) -> Self {
        match value as i32 {
            i32::MIN..=0 => Skill::Easy,
            1 => Skill::Medium,
            2 => Skill::Hard,
            _ => Skill::HardPlus,
        }
    }

    /// The spawnflag that hides an entity at this skill
    pub fn exclusion_flag(self) -> SpawnFlags {
        match self {
            Skill::Easy => SpawnFlags::NOT_EASY,
            Skill::Medium => SpawnFlags::NOT_MEDIUM,
            Skill::Hard | Skill::HardPlus => SpawnFlags::NOT_HARD,
        }
    }
}

/// Mode and difficulty source for a load.
///
/// `skill` is normalized at the start of every load and the corrected value
/// is written back here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub skill: f32,
    pub deathmatch: bool,
    pub coop: bool,
    /// Slots reserved for player clients
    pub max_clients: usize,
    /// Entity pool capacity
    pub max_entities: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            skill: 1.0,
            deathmatch: false,
            coop: false,
            max_clients: DEFAULT_MAX_CLIENTS,
            max_entities: DEFAULT_MAX_ENTITIES,
        }
    }
}

impl GameRules {
    /// Floor `skill` and clamp it into `0..=3`.
    ///
    /// Returns the previous value if it had to be changed.
    pub fn normalize_skill(&mut self) -> Option<f32> {
        let level = if self.skill.is_nan() {
            0.0
        } else {
            self.skill.floor().clamp(0.0, 3.0)
        };

        if level == self.skill {
            return None;
        }

        let previous = self.skill;
        self.skill = level;
        Some(previous)
    }

    /// Current difficulty level
    pub fn skill_level(&self) -> Skill {
        Skill::from_value(self.skill)
    }

    /// Check if coop-specific rules apply
    pub fn is_coop(&self) -> bool {
        self.coop && !self.deathmatch
    }
}
