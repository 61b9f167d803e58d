//! What a spawn function can see and touch

use crate::diagnostics::Diagnostics;
use crate::entity::{Entity, EntityId, EntityPool, SpawnTemp};
use crate::level::{GameRules, LoadContext};

use super::ItemRegistry;

/// Borrowed view of the load handed to every spawn function
pub struct SpawnContext<'a> {
    pub pool: &'a mut EntityPool,
    /// Staged values of the record being spawned
    pub spawn_temp: &'a SpawnTemp,
    pub level: &'a mut LoadContext,
    pub rules: &'a GameRules,
    pub items: &'a ItemRegistry,
    pub diagnostics: &'a mut Diagnostics,
}

impl SpawnContext<'_> {
    /// Mutable access to an entity
    pub fn entity(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.pool.get_mut(id)
    }

    /// Release an entity; the world is never released
    pub fn free(&mut self, id: EntityId) -> bool {
        self.pool.free(id)
    }
}
