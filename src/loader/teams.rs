//! Team chain linking

use serde::Serialize;
use tracing::debug;

use crate::entity::{EntityFlags, EntityId, EntityPool};

/// Result of a linking pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamStats {
    /// Teams whose head was found in this pass
    pub teams: usize,
    /// Entities linked into those teams, heads included
    pub entities: usize,
}

/// Chain entities that share a team key.
///
/// The lowest slot of each team becomes its head and points at itself; every
/// later member is appended to the head's chain and flagged as a slave.
/// Entities that are already slaves are skipped, so a second pass links nothing.
pub fn find_teams(pool: &mut EntityPool) -> TeamStats {
    let slots = pool.slots_mut();
    let mut stats = TeamStats::default();

    for i in 1..slots.len() {
        if !slots[i].in_use || slots[i].is_team_slave() {
            continue;
        }
        let Some(team) = slots[i].team_key().map(str::to_string) else {
            continue;
        };

        let head = EntityId(i);
        slots[i].team_master = Some(head);
        stats.teams += 1;
        stats.entities += 1;

        let mut chain = i;
        for j in i + 1..slots.len() {
            let member = &slots[j];
            if !member.in_use || member.is_team_slave() || member.team_key() != Some(team.as_str()) {
                continue;
            }

            slots[chain].team_chain = Some(EntityId(j));
            slots[j].team_master = Some(head);
            slots[j].flags |= EntityFlags::TEAM_SLAVE;
            chain = j;
            stats.entities += 1;
        }

        debug!("team '{}' headed by {}", team, head);
    }

    stats
}
