//! Entity system - typed entities, the slot pool and the spawn staging record

mod entity;
mod pool;
mod spawn_temp;

pub use entity::{ClientId, Entity, EntityFlags, EntityId, ItemId, SpawnFlags, Vec3};
pub use pool::{EntityPool, PoolExhausted, DEFAULT_MAX_CLIENTS, DEFAULT_MAX_ENTITIES};
pub use spawn_temp::SpawnTemp;
