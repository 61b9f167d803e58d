//! entspawn - level entity loader
//!
//! Reads the entity string of a compiled map, decodes each record into a typed
//! [`Entity`](entity::Entity), filters it by game mode and skill, hands it to
//! the spawn function registered for its classname and finally links team
//! chains.

pub mod diagnostics;
pub mod entity;
pub mod fields;
pub mod level;
pub mod lexer;
pub mod loader;
pub mod spawn;

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use entity::{Entity, EntityId, EntityPool};
pub use level::GameRules;
pub use loader::{LoadError, LoadSummary, OverrideRule, OverrideTable, Spawner};
pub use spawn::{SpawnContext, SpawnTable};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "ENTSPAWN_";

/// Loader configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rules: GameRules,
    /// Map corrections applied after the built-in ones
    pub overrides: Vec<OverrideRule>,
}

impl Config {
    /// Load defaults, then the TOML file at `path` if given, then
    /// `ENTSPAWN_`-prefixed environment variables (`ENTSPAWN_RULES__SKILL=2`).
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__")).extract()
    }

    /// Built-in overrides followed by the configured ones
    pub fn override_table(&self) -> OverrideTable {
        let mut table = OverrideTable::standard();
        table.extend(self.overrides.iter().cloned());
        table
    }
}

/// Read an entity string file.
///
/// Map text may carry high-bit characters that are not UTF-8; those bytes are
/// replaced with U+FFFD rather than rejecting the file. Only bytes above 0x7f
/// are affected, so token boundaries are unchanged.
pub fn read_entities(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("{} is not valid UTF-8; replaced invalid bytes", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}
