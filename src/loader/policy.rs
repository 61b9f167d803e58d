//! Game mode and skill filtering of freshly parsed entities

use serde::Serialize;

use crate::entity::{Entity, SpawnFlags};
use crate::level::{GameRules, Skill};

/// Why an entity was left out of the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InhibitReason {
    /// Flagged as absent in deathmatch
    Deathmatch,
    /// Removed by a map override
    Override,
    /// Flagged as absent at the current skill
    Skill(Skill),
}

/// Decide whether a non-world entity is kept.
///
/// `overridden` is the verdict of the coop override rules, already computed
/// by the caller since those rules may also edit the entity.
pub fn inhibit_reason(ent: &Entity, rules: &GameRules, overridden: bool) -> Option<InhibitReason> {
    if rules.deathmatch {
        return ent
            .has_spawn_flags(SpawnFlags::NOT_DEATHMATCH)
            .then_some(InhibitReason::Deathmatch);
    }

    if overridden {
        return Some(InhibitReason::Override);
    }

    let skill = rules.skill_level();
    ent.has_spawn_flags(skill.exclusion_flag())
        .then_some(InhibitReason::Skill(skill))
}
