//! Level loading state machine

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::entity::{EntityId, EntityPool, SpawnFlags, SpawnTemp};
use crate::fields::FieldTable;
use crate::level::{GameRules, LoadContext, LoadPhase};
use crate::lexer::Lexer;
use crate::spawn::{Dispatch, SpawnContext, SpawnTable};

use super::overrides::{OverrideMode, OverrideTable};
use super::policy::{inhibit_reason, InhibitReason};
use super::record::parse_record;
use super::teams::find_teams;
use super::LoadError;

/// Outcome of a successful load
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadSummary {
    pub map: String,
    /// Records whose classname resolved to an item or spawn function, world included
    pub spawned: usize,
    /// Records dropped by mode, skill or override rules
    pub inhibited: usize,
    /// Records whose classname matched nothing
    pub unresolved: usize,
    pub teams: usize,
    /// Entities linked into teams, heads included
    pub team_members: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Loads entity strings into an owned [`EntityPool`].
///
/// Each call to [`spawn_entities`](Spawner::spawn_entities) discards the
/// previous level.
pub struct Spawner {
    fields: &'static FieldTable,
    table: Arc<SpawnTable>,
    overrides: OverrideTable,
    rules: GameRules,
    pool: EntityPool,
    spawn_temp: SpawnTemp,
    level: LoadContext,
    diagnostics: Diagnostics,
    phase: LoadPhase,
}

#[derive(Default)]
struct RecordCounts {
    spawned: usize,
    inhibited: usize,
    unresolved: usize,
}

impl Spawner {
    /// Create a spawner with the standard field schema and map overrides
    pub fn new(table: Arc<SpawnTable>, rules: GameRules) -> Self {
        let pool = EntityPool::new(rules.max_entities, rules.max_clients);
        Self {
            fields: FieldTable::standard(),
            table,
            overrides: OverrideTable::standard(),
            rules,
            pool,
            spawn_temp: SpawnTemp::default(),
            level: LoadContext::default(),
            diagnostics: Diagnostics::new(),
            phase: LoadPhase::Idle,
        }
    }

    /// Use a different field schema
    pub fn with_fields(mut self, fields: &'static FieldTable) -> Self {
        self.fields = fields;
        self
    }

    /// Replace the override rules
    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn pool(&self) -> &EntityPool {
        &self.pool
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Rules for the next load; pool dimensions take effect on that load
    pub fn rules_mut(&mut self) -> &mut GameRules {
        &mut self.rules
    }

    /// State of the last load
    pub fn level(&self) -> &LoadContext {
        &self.level
    }

    /// Diagnostics of the last load
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn fields(&self) -> &'static FieldTable {
        self.fields
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// Load `entities` as the level `map`, with players entering at `spawnpoint`.
    ///
    /// On error the level is left partially populated and must not be used.
    pub fn spawn_entities(
        &mut self,
        map: &str,
        entities: &str,
        spawnpoint: &str,
    ) -> Result<LoadSummary, LoadError> {
        self.phase = LoadPhase::LoadingHeader;
        self.load_header(map, spawnpoint);

        self.phase = LoadPhase::ParsingRecords;
        let parsed = self.parse_records(entities);
        self.spawn_temp.reset();

        let counts = match parsed {
            Ok(counts) => counts,
            Err(e) => {
                error!("failed to load {}: {}", map, e);
                self.phase = LoadPhase::Fatal;
                return Err(e);
            }
        };

        self.phase = LoadPhase::Linking;
        let teams = find_teams(&mut self.pool);

        self.phase = LoadPhase::Done;
        info!(
            "{}: {} entities spawned, {} inhibited, {} teams with {} entities",
            map, counts.spawned, counts.inhibited, teams.teams, teams.entities
        );

        Ok(LoadSummary {
            map: map.to_string(),
            spawned: counts.spawned,
            inhibited: counts.inhibited,
            unresolved: counts.unresolved,
            teams: teams.teams,
            team_members: teams.entities,
            diagnostics: self.diagnostics.entries().to_vec(),
        })
    }

    fn load_header(&mut self, map: &str, spawnpoint: &str) {
        self.diagnostics.clear();

        if let Some(from) = self.rules.normalize_skill() {
            self.diagnostics.warn(Diagnostic::SkillClamped {
                from,
                to: self.rules.skill,
            });
        }

        let resized = self.pool.capacity() != self.rules.max_entities.max(self.rules.max_clients + 1)
            || self.pool.max_clients() != self.rules.max_clients;
        if resized {
            self.pool = EntityPool::new(self.rules.max_entities, self.rules.max_clients);
        } else {
            self.pool.clear();
        }

        self.level = LoadContext::new(map, spawnpoint);
        self.pool.bind_clients();
        debug!(
            "loading {} at skill {} (deathmatch {}, coop {})",
            map, self.rules.skill, self.rules.deathmatch, self.rules.coop
        );
    }

    fn parse_records(&mut self, entities: &str) -> Result<RecordCounts, LoadError> {
        let mut lexer = Lexer::new(entities);
        let mut counts = RecordCounts::default();
        let mut next = Some(EntityId::WORLD);

        while let Some(token) = lexer.next_token() {
            if !token.is_open_brace() {
                return Err(LoadError::ExpectedOpenBrace {
                    found: token.text.to_string(),
                    line: token.line,
                });
            }

            let id = match next.take() {
                Some(world) => world,
                None => self.pool.spawn()?,
            };
            self.level.records += 1;

            let ent = &mut self.pool.slots_mut()[id.index()];
            parse_record(
                &mut lexer,
                ent,
                &mut self.spawn_temp,
                self.fields,
                &mut self.diagnostics,
            )?;

            let map = self.level.map_name.as_str();
            let forced = self.overrides.apply(OverrideMode::Always, map, ent);
            if forced && id.is_world() {
                debug!("ignoring inhibit override for the world on {}", map);
            }

            if !id.is_world() {
                let coop = self.rules.is_coop() && self.overrides.apply(OverrideMode::Coop, map, ent);
                let reason = if forced {
                    Some(InhibitReason::Override)
                } else {
                    inhibit_reason(ent, &self.rules, coop)
                };

                if let Some(reason) = reason {
                    debug!(
                        "inhibited {} {} ({:?})",
                        id,
                        ent.classname().unwrap_or("?"),
                        reason
                    );
                    self.pool.free(id);
                    counts.inhibited += 1;
                    self.level.inhibited += 1;
                    continue;
                }

                ent.clear_spawn_flags(SpawnFlags::LOAD_ONLY);
            }

            let mut ctx = SpawnContext {
                pool: &mut self.pool,
                spawn_temp: &self.spawn_temp,
                level: &mut self.level,
                rules: &self.rules,
                items: self.table.items(),
                diagnostics: &mut self.diagnostics,
            };
            match self.table.dispatch(&mut ctx, id) {
                Dispatch::Item(_) | Dispatch::Spawned => counts.spawned += 1,
                Dispatch::Unresolved => counts.unresolved += 1,
                Dispatch::MissingClassname => {}
            }
        }

        Ok(counts)
    }
}
