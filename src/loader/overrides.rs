//! Per-map entity corrections applied while loading

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::{Entity, SpawnFlags};

/// When a rule is considered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideMode {
    /// Every record, the world included, in every game mode
    #[default]
    Always,
    /// Non-world records in cooperative play only
    Coop,
}

/// What a matching rule does
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideAction {
    /// Drop the entity
    Inhibit,
    /// Replace the entity's message
    SetMessage(String),
    /// Clear spawnflag bits
    ClearSpawnFlags(u32),
}

/// An entity correction for one map.
///
/// String criteria compare case-insensitively. A missing criterion matches
/// anything; a present one never matches an entity whose field is unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRule {
    pub map: String,
    #[serde(default)]
    pub mode: OverrideMode,
    #[serde(default)]
    pub classname: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub targetname: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub action: OverrideAction,
}

fn criterion(want: &Option<String>, have: &Option<String>) -> bool {
    match (want, have) {
        (None, _) => true,
        (Some(want), Some(have)) => want.eq_ignore_ascii_case(have),
        (Some(_), None) => false,
    }
}

impl OverrideRule {
    /// Rule for `map` with no criteria
    pub fn new(map: &str, mode: OverrideMode, action: OverrideAction) -> Self {
        Self {
            map: map.to_string(),
            mode,
            classname: None,
            target: None,
            targetname: None,
            model: None,
            action,
        }
    }

    pub fn classname(mut self, classname: &str) -> Self {
        self.classname = Some(classname.to_string());
        self
    }

    pub fn target(mut self, target: &str) -> Self {
        self.target = Some(target.to_string());
        self
    }

    pub fn targetname(mut self, targetname: &str) -> Self {
        self.targetname = Some(targetname.to_string());
        self
    }

    pub fn model(mut self, model: &str) -> Self {
        self.model = Some(model.to_string());
        self
    }

    /// Check if this rule applies to `ent` on `map`
    pub fn matches(&self, map: &str, ent: &Entity) -> bool {
        self.map.eq_ignore_ascii_case(map)
            && criterion(&self.classname, &ent.classname)
            && criterion(&self.target, &ent.target)
            && criterion(&self.targetname, &ent.targetname)
            && criterion(&self.model, &ent.model)
    }
}

/// Ordered rule list
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    rules: Vec<OverrideRule>,
}

impl OverrideTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Corrections for known problems in the stock maps
    pub fn standard() -> Self {
        let mut table = Self::new();

        // the hard-skill trigger on this map blocks progress
        table.push(
            OverrideRule::new(
                "command",
                OverrideMode::Always,
                OverrideAction::ClearSpawnFlags(SpawnFlags::NOT_HARD.bits()),
            )
            .classname("trigger_once")
            .model("*27"),
        );

        // in coop the sewer hatches open through different triggers
        table.push(
            OverrideRule::new("xsewer1", OverrideMode::Coop, OverrideAction::Inhibit)
                .classname("trigger_relay")
                .target("t3")
                .targetname("t2"),
        );
        table.push(
            OverrideRule::new(
                "xsewer1",
                OverrideMode::Coop,
                OverrideAction::SetMessage("Overflow valve maintenance\nhatch A opened.".to_string()),
            )
            .classname("func_button")
            .target("t16")
            .model("*71"),
        );
        table.push(
            OverrideRule::new(
                "xsewer1",
                OverrideMode::Coop,
                OverrideAction::SetMessage("Overflow valve maintenance\nhatch B opened.".to_string()),
            )
            .classname("trigger_once")
            .model("*3"),
        );

        table
    }

    /// Append a rule
    pub fn push(&mut self, rule: OverrideRule) {
        self.rules.push(rule);
    }

    /// Append several rules
    pub fn extend(&mut self, rules: impl IntoIterator<Item = OverrideRule>) {
        self.rules.extend(rules);
    }

    /// Iterate rules in application order
    pub fn iter(&self) -> impl Iterator<Item = &OverrideRule> {
        self.rules.iter()
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every matching rule of `mode` to `ent`.
    ///
    /// Returns true if a rule asked for the entity to be inhibited.
    pub fn apply(&self, mode: OverrideMode, map: &str, ent: &mut Entity) -> bool {
        let mut inhibit = false;
        for rule in self.rules.iter().filter(|r| r.mode == mode) {
            if !rule.matches(map, ent) {
                continue;
            }
            debug!(
                "override on {} for {}: {:?}",
                map,
                ent.classname().unwrap_or("?"),
                rule.action
            );
            match &rule.action {
                OverrideAction::Inhibit => inhibit = true,
                OverrideAction::SetMessage(message) => ent.message = Some(message.clone()),
                OverrideAction::ClearSpawnFlags(bits) => {
                    ent.clear_spawn_flags(SpawnFlags::from_bits_retain(*bits))
                }
            }
        }
        inhibit
    }
}
