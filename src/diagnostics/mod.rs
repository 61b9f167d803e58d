//! Load diagnostics - recoverable problems found while loading a level
//!
//! Every diagnostic is logged through `tracing` as it is recorded and kept so
//! callers can inspect what went wrong after a load that otherwise succeeded.

use serde::Serialize;
use std::fmt;
use tracing::warn;

use crate::entity::EntityId;

/// A recoverable load problem
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Key has no matching field; the value was dropped
    UnknownField {
        key: String,
        value: String,
        line: usize,
    },
    /// Classname matches neither an item nor a spawn function; the entity is inert
    UnresolvedClassname { classname: String, entity: EntityId },
    /// Record had no classname; the entity was freed unless it is the world
    MissingClassname { entity: EntityId },
    /// Skill was outside `0..=3` or fractional and has been corrected
    SkillClamped { from: f32, to: f32 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownField { key, value, line } => {
                write!(f, "'{}' is not a field. Value is '{}' (line {})", key, value, line)
            }
            Diagnostic::UnresolvedClassname { classname, entity } => {
                write!(f, "{} doesn't have a spawn function (entity {})", classname, entity)
            }
            Diagnostic::MissingClassname { entity } if entity.is_world() => {
                write!(f, "world record has no classname")
            }
            Diagnostic::MissingClassname { entity } => {
                write!(f, "entity {} has no classname and was freed", entity)
            }
            Diagnostic::SkillClamped { from, to } => {
                write!(f, "skill {} out of range, forced to {}", from, to)
            }
        }
    }
}

/// Collects diagnostics for one load
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Record and log a diagnostic
    pub fn warn(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.entries.push(diagnostic);
    }

    /// All recorded diagnostics in order
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Iterate recorded diagnostics
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Number of recorded diagnostics
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop everything recorded so far
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Take the recorded diagnostics, leaving the collection empty
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.entries)
    }
}
