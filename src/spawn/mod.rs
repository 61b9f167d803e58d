//! Spawn dispatch - turning decoded records into typed entities
//!
//! A classname resolves against the [`ItemRegistry`] first, then against the
//! spawn functions of a [`SpawnTable`]. Spawn functions receive a
//! [`SpawnContext`] with the pool, the staged record and the level state.

pub mod builtin;
mod context;
mod items;
mod names;
mod registry;

pub use context::SpawnContext;
pub use items::{ItemDef, ItemFlags, ItemRegistry};
pub use names::STANDARD_CLASSNAMES;
pub use registry::{Dispatch, ItemFn, SpawnFn, SpawnTable, SpawnTableBuilder, SpawnTableError};
