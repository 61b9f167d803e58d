//! Spawn-time staging record

use super::Vec3;

/// Fields that only matter while a spawn function runs.
///
/// Reset before every record and once more after the last record, so a spawn
/// function never sees values left over from a previous entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnTemp {
    pub lip: i32,
    pub distance: i32,
    pub height: i32,
    pub noise: Option<String>,
    pub pausetime: f32,
    pub item: Option<String>,
    pub gravity: Option<String>,
    pub sky: Option<String>,
    pub skyrotate: f32,
    pub skyaxis: Vec3,
    pub minyaw: f32,
    pub maxyaw: f32,
    pub minpitch: f32,
    pub maxpitch: f32,
    pub nextmap: Option<String>,
}

impl SpawnTemp {
    /// Clear every staged value
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
