//! Load test harness
//!
//! `TestLoader` wraps a [`Spawner`] whose spawn table records every dispatch
//! before handing it to the standard spawn functions:
//!
//! ```rust,ignore
//! let mut loader = TestLoader::new();
//! loader.load("base1", r#"{ "classname" "worldspawn" }"#).unwrap();
//! assert_eq!(loader.classnames(), ["worldspawn"]);
//! ```

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use entspawn::entity::{Entity, EntityId, ItemId};
use entspawn::level::GameRules;
use entspawn::loader::{LoadError, LoadSummary, OverrideTable, Spawner};
use entspawn::spawn::{builtin, SpawnContext, SpawnTable, STANDARD_CLASSNAMES};

/// One spawn function or item handler invocation
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnCall {
    pub id: EntityId,
    pub classname: String,
    pub item: Option<ItemId>,
}

type CallLog = Arc<Mutex<Vec<SpawnCall>>>;

fn record(calls: &CallLog, ctx: &mut SpawnContext<'_>, id: EntityId, item: Option<ItemId>) {
    let classname = ctx
        .pool
        .get(id)
        .and_then(|e| e.classname.clone())
        .unwrap_or_default();
    calls
        .lock()
        .unwrap()
        .push(SpawnCall { id, classname, item });
}

/// Spawn table that logs into `calls` and then behaves like the standard one
pub fn recording_table(calls: CallLog) -> SpawnTable {
    let standard = Arc::new(SpawnTable::standard());

    let item_calls = calls.clone();
    let mut builder = SpawnTable::builder()
        .items(standard.items().clone())
        .item_handler(move |ctx: &mut SpawnContext<'_>, id, item_id, item| {
            record(&item_calls, ctx, id, Some(item_id));
            builtin::spawn_item(ctx, id, item_id, item);
        });

    for &name in STANDARD_CLASSNAMES {
        let calls = calls.clone();
        let standard = standard.clone();
        builder = builder.register(name, move |ctx: &mut SpawnContext<'_>, id| {
            record(&calls, ctx, id, None);
            standard.dispatch(ctx, id);
        });
    }

    builder.build().unwrap()
}

/// A spawner with a recording spawn table
pub struct TestLoader {
    pub spawner: Spawner,
    calls: CallLog,
}

impl TestLoader {
    pub fn new() -> Self {
        Self::with_rules(GameRules::default())
    }

    pub fn with_rules(rules: GameRules) -> Self {
        let calls = CallLog::default();
        let table = Arc::new(recording_table(calls.clone()));
        Self {
            spawner: Spawner::new(table, rules),
            calls,
        }
    }

    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.spawner = self.spawner.with_overrides(overrides);
        self
    }

    /// Load `src` as `map`, forgetting calls from earlier loads
    pub fn load(&mut self, map: &str, src: &str) -> Result<LoadSummary, LoadError> {
        self.calls.lock().unwrap().clear();
        self.spawner.spawn_entities(map, src, "")
    }

    pub fn calls(&self) -> Vec<SpawnCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Classnames in dispatch order
    pub fn classnames(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.classname).collect()
    }

    pub fn entity(&self, id: EntityId) -> &Entity {
        self.spawner.pool().get(id).unwrap()
    }

    /// Live entities with the given classname, in slot order
    pub fn find(&self, classname: &str) -> Vec<(EntityId, Entity)> {
        self.spawner
            .pool()
            .live()
            .filter(|(_, e)| e.classname() == Some(classname))
            .map(|(id, e)| (id, e.clone()))
            .collect()
    }

    /// The single live entity with the given classname
    pub fn one(&self, classname: &str) -> (EntityId, Entity) {
        let mut found = self.find(classname);
        assert_eq!(found.len(), 1, "expected one {}", classname);
        found.remove(0)
    }
}
