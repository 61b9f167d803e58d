//! Per-load state

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::entity::Vec3;

/// Where a [`Spawner`](crate::loader::Spawner) is in its load cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    Idle,
    LoadingHeader,
    ParsingRecords,
    Linking,
    Done,
    Fatal,
}

impl fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoadPhase::Idle => "idle",
            LoadPhase::LoadingHeader => "loading header",
            LoadPhase::ParsingRecords => "parsing records",
            LoadPhase::Linking => "linking",
            LoadPhase::Done => "done",
            LoadPhase::Fatal => "fatal",
        };
        f.write_str(name)
    }
}

/// Level-wide settings published by the world entity
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorldSettings {
    /// Display name (world message, or the map name)
    pub level_name: String,
    /// Map to load when the level ends
    pub next_map: Option<String>,
    pub sky: String,
    pub sky_rotate: f32,
    pub sky_axis: Vec3,
    pub cd_track: i32,
    /// Gravity setting as written in the map
    pub gravity: String,
    /// Light style animation strings by style index
    pub light_styles: BTreeMap<u8, String>,
}

/// State that lives for exactly one load
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadContext {
    pub map_name: String,
    /// Entry point the players arrive at
    pub spawnpoint: String,
    pub world: WorldSettings,
    /// Records read, world included
    pub records: usize,
    /// Entities dropped by mode, skill or override rules
    pub inhibited: usize,
}

impl LoadContext {
    /// Fresh context for loading `map_name`
    pub fn new(map_name: &str, spawnpoint: &str) -> Self {
        Self {
            map_name: map_name.to_string(),
            spawnpoint: spawnpoint.to_string(),
            ..Default::default()
        }
    }
}
