//! Classname to spawn function dispatch

use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::diagnostics::Diagnostic;
use crate::entity::{EntityId, ItemId};

use super::{builtin, ItemDef, ItemRegistry, SpawnContext, STANDARD_CLASSNAMES};

/// Errors from building a spawn table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnTableError {
    #[error("spawn function '{0}' registered twice")]
    DuplicateName(String),
    #[error("spawn function '{0}' is unreachable: an item has the same classname")]
    ShadowedByItem(String),
}

/// A spawn function.
///
/// Implemented for every `Fn(&mut SpawnContext, EntityId)`, so plain functions
/// and closures can both be registered.
pub trait SpawnFn: Send + Sync {
    fn spawn(&self, ctx: &mut SpawnContext<'_>, id: EntityId);
}

impl<F> SpawnFn for F
where
    F: Fn(&mut SpawnContext<'_>, EntityId) + Send + Sync,
{
    fn spawn(&self, ctx: &mut SpawnContext<'_>, id: EntityId) {
        self(ctx, id)
    }
}

/// Handler run for entities whose classname names an item
pub trait ItemFn: Send + Sync {
    fn spawn_item(&self, ctx: &mut SpawnContext<'_>, id: EntityId, item_id: ItemId, item: &ItemDef);
}

impl<F> ItemFn for F
where
    F: Fn(&mut SpawnContext<'_>, EntityId, ItemId, &ItemDef) + Send + Sync,
{
    fn spawn_item(&self, ctx: &mut SpawnContext<'_>, id: EntityId, item_id: ItemId, item: &ItemDef) {
        self(ctx, id, item_id, item)
    }
}

/// How a dispatch resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Spawned through the item handler
    Item(ItemId),
    /// Spawned by a registered spawn function
    Spawned,
    /// No item or spawn function matched; the entity was left inert
    Unresolved,
    /// The entity had no classname; it was freed unless it is the world
    MissingClassname,
}

struct SpawnEntry {
    name: String,
    factory: Box<dyn SpawnFn>,
}

/// Immutable classname lookup: items first, then spawn functions in
/// registration order. All matching is exact and case-sensitive.
pub struct SpawnTable {
    items: ItemRegistry,
    item_handler: Box<dyn ItemFn>,
    entries: Vec<SpawnEntry>,
}

impl fmt::Debug for SpawnTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpawnTable")
            .field("items", &self.items.len())
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl SpawnTable {
    /// Start an empty table
    pub fn builder() -> SpawnTableBuilder {
        SpawnTableBuilder::new()
    }

    /// Standard items and every built-in spawn function
    pub fn standard() -> Self {
        Self {
            items: ItemRegistry::standard(),
            item_handler: Box::new(builtin::spawn_item),
            entries: STANDARD_CLASSNAMES
                .iter()
                .map(|&name| SpawnEntry {
                    name: name.to_string(),
                    factory: default_spawn(name),
                })
                .collect(),
        }
    }

    /// Item registry consulted before the spawn functions
    pub fn items(&self) -> &ItemRegistry {
        &self.items
    }

    /// Check if a spawn function is registered for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Spawn function names in lookup order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Number of registered spawn functions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no spawn functions are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, name: &str) -> Option<&dyn SpawnFn> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.factory.as_ref())
    }

    /// Run the spawn function for entity `id`'s classname
    pub fn dispatch(&self, ctx: &mut SpawnContext<'_>, id: EntityId) -> Dispatch {
        let Some(classname) = ctx.pool.get(id).and_then(|e| e.classname.clone()) else {
            ctx.diagnostics
                .warn(Diagnostic::MissingClassname { entity: id });
            if !id.is_world() {
                ctx.free(id);
            }
            return Dispatch::MissingClassname;
        };

        if let Some((item_id, item)) = self.items.find(&classname) {
            debug!("entity {} '{}' spawned as item", id, classname);
            self.item_handler.spawn_item(ctx, id, item_id, item);
            return Dispatch::Item(item_id);
        }

        if let Some(factory) = self.find(&classname) {
            debug!("entity {} '{}' spawned", id, classname);
            factory.spawn(ctx, id);
            return Dispatch::Spawned;
        }

        ctx.diagnostics.warn(Diagnostic::UnresolvedClassname {
            classname,
            entity: id,
        });
        Dispatch::Unresolved
    }
}

/// Built-in spawn function for a standard classname
fn default_spawn(name: &str) -> Box<dyn SpawnFn> {
    match name {
        "worldspawn" => Box::new(builtin::worldspawn),
        "item_health" | "item_health_small" | "item_health_large" | "item_health_mega" => {
            Box::new(builtin::item_health)
        }
        "info_null" => Box::new(builtin::info_null),
        _ => Box::new(builtin::inert),
    }
}

/// Collects spawn functions before freezing them into a [`SpawnTable`]
pub struct SpawnTableBuilder {
    items: ItemRegistry,
    item_handler: Box<dyn ItemFn>,
    entries: Vec<SpawnEntry>,
}

impl Default for SpawnTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpawnTableBuilder {
    /// No items, no spawn functions, the default item handler
    pub fn new() -> Self {
        Self {
            items: ItemRegistry::new(),
            item_handler: Box::new(builtin::spawn_item),
            entries: Vec::new(),
        }
    }

    /// Use `items` as the item registry
    pub fn items(mut self, items: ItemRegistry) -> Self {
        self.items = items;
        self
    }

    /// Replace the handler run for item classnames
    pub fn item_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut SpawnContext<'_>, EntityId, ItemId, &ItemDef) + Send + Sync + 'static,
    {
        self.item_handler = Box::new(handler);
        self
    }

    /// Register a spawn function for `name`
    pub fn register<F>(mut self, name: &str, factory: F) -> Self
    where
        F: Fn(&mut SpawnContext<'_>, EntityId) + Send + Sync + 'static,
    {
        self.entries.push(SpawnEntry {
            name: name.to_string(),
            factory: Box::new(factory),
        });
        self
    }

    /// Register an already boxed spawn function
    pub fn register_boxed(mut self, name: &str, factory: Box<dyn SpawnFn>) -> Self {
        self.entries.push(SpawnEntry {
            name: name.to_string(),
            factory,
        });
        self
    }

    /// Register the built-in spawn function of every standard classname that
    /// has not been registered yet.
    pub fn register_defaults(mut self) -> Self {
        for &name in STANDARD_CLASSNAMES {
            if self.entries.iter().any(|e| e.name == name) {
                continue;
            }
            self = self.register_boxed(name, default_spawn(name));
        }
        self
    }

    /// Check names and freeze the table
    pub fn build(self) -> Result<SpawnTable, SpawnTableError> {
        for (i, entry) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(SpawnTableError::DuplicateName(entry.name.clone()));
            }
            if self.items.find(&entry.name).is_some() {
                return Err(SpawnTableError::ShadowedByItem(entry.name.clone()));
            }
        }

        Ok(SpawnTable {
            items: self.items,
            item_handler: self.item_handler,
            entries: self.entries,
        })
    }
}
