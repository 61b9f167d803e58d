//! Fixed-capacity entity slot pool

use thiserror::Error;
use tracing::{debug, warn};

use super::{ClientId, Entity, EntityId};

/// Default slot capacity of a pool
pub const DEFAULT_MAX_ENTITIES: usize = 1024;

/// Default number of slots reserved for player clients
pub const DEFAULT_MAX_CLIENTS: usize = 1;

/// Returned when every slot of the pool is in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no free entity slots (capacity {capacity})")]
pub struct PoolExhausted {
    pub capacity: usize,
}

/// Entity storage indexed by slot.
///
/// Layout:
/// - slot 0: the world, never freed
/// - slots `1..=max_clients`: reserved for player clients
/// - remaining slots: handed out by [`EntityPool::spawn`]
#[derive(Debug, Clone)]
pub struct EntityPool {
    slots: Vec<Entity>,
    num_entities: usize,
    max_clients: usize,
}

impl Default for EntityPool {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTITIES, DEFAULT_MAX_CLIENTS)
    }
}

impl EntityPool {
    /// Create a zeroed pool.
    ///
    /// The capacity is raised if needed so the world and every client slot fit.
    pub fn new(max_entities: usize, max_clients: usize) -> Self {
        let capacity = max_entities.max(max_clients + 1);
        Self {
            slots: vec![Entity::default(); capacity],
            num_entities: max_clients + 1,
            max_clients,
        }
    }

    /// Total number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots reserved for player clients
    pub fn max_clients(&self) -> usize {
        self.max_clients
    }

    /// One past the highest slot ever handed out since the last clear
    pub fn num_entities(&self) -> usize {
        self.num_entities
    }

    /// Zero every slot and forget all allocations
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Entity::default();
        }
        self.num_entities = self.max_clients + 1;
    }

    /// Bind a client id to each reserved player slot
    pub fn bind_clients(&mut self) {
        for i in 0..self.max_clients {
            self.slots[i + 1].client = Some(ClientId(i));
        }
    }

    /// Allocate a slot for a new entity.
    ///
    /// Reuses the lowest free slot above the client range before growing the
    /// high-water mark. The returned entity is zeroed and marked in use.
    pub fn spawn(&mut self) -> Result<EntityId, PoolExhausted> {
        let first = self.max_clients + 1;
        let reusable = (first..self.num_entities).find(|&i| !self.slots[i].in_use);

        let index = match reusable {
            Some(i) => i,
            None => {
                if self.num_entities == self.slots.len() {
                    return Err(PoolExhausted {
                        capacity: self.slots.len(),
                    });
                }
                self.num_entities += 1;
                self.num_entities - 1
            }
        };

        self.slots[index] = Entity {
            in_use: true,
            ..Default::default()
        };
        Ok(EntityId(index))
    }

    /// Release a slot.
    ///
    /// The world slot is never freed; client slots keep their client binding.
    /// Returns true if the slot was released.
    pub fn free(&mut self, id: EntityId) -> bool {
        if id.is_world() {
            warn!("refusing to free the world entity");
            return false;
        }

        let Some(slot) = self.slots.get_mut(id.index()) else {
            return false;
        };

        let client = slot.client;
        *slot = Entity {
            client,
            ..Default::default()
        };
        debug!("freed entity {}", id);
        true
    }

    /// Get an entity by slot
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.slots.get(id.index())
    }

    /// Get a mutable entity by slot
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.slots.get_mut(id.index())
    }

    /// The world entity
    pub fn world(&self) -> &Entity {
        &self.slots[0]
    }

    /// Iterate over every slot below the high-water mark
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.slots[..self.num_entities]
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityId(i), e))
    }

    /// Iterate over entities that are in use
    pub fn live(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.iter().filter(|(_, e)| e.in_use)
    }

    /// Slots below the high-water mark, for passes that need mutable access
    pub(crate) fn slots_mut(&mut self) -> &mut [Entity] {
        let n = self.num_entities;
        &mut self.slots[..n]
    }
}
