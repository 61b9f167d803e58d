//! Entity types and core structures

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-component vector used for origins, angles and axes
pub type Vec3 = [f32; 3];

/// Slot index of an entity inside the [`EntityPool`](super::EntityPool)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub usize);

impl EntityId {
    /// The world entity always lives in slot 0
    pub const WORLD: EntityId = EntityId(0);

    /// Slot index
    pub fn index(self) -> usize {
        self.0
    }

    /// Check if this is the world slot
    pub fn is_world(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Player client bound to one of the reserved slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub usize);

/// Index into an [`ItemRegistry`](crate::spawn::ItemRegistry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub usize);

bitflags! {
    /// Load-time `spawnflags` bits that filter entities by mode and skill.
    ///
    /// Only these bits are interpreted by the loader; the rest of the
    /// `spawnflags` value belongs to the individual spawn functions.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct SpawnFlags: u32 {
        const NOT_EASY       = 0x0000_0100;
        const NOT_MEDIUM     = 0x0000_0200;
        const NOT_HARD       = 0x0000_0400;
        const NOT_DEATHMATCH = 0x0000_0800;
        const NOT_COOP       = 0x0000_1000;

        /// Every bit the loader strips from surviving entities
        const LOAD_ONLY = Self::NOT_EASY.bits()
            | Self::NOT_MEDIUM.bits()
            | Self::NOT_HARD.bits()
            | Self::NOT_DEATHMATCH.bits()
            | Self::NOT_COOP.bits();
    }
}

bitflags! {
    /// Runtime entity flags
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct EntityFlags: u32 {
        /// Member of a team chain that is not its head
        const TEAM_SLAVE = 0x0000_0400;
    }
}

/// A level entity decoded from one record of an entity string.
///
/// `Entity::default()` is the fully zeroed, unused entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Slot is allocated
    pub in_use: bool,
    /// Spawn function selector (e.g. "worldspawn", "func_door")
    pub classname: Option<String>,
    /// Brush model reference ("*12") or model path
    pub model: Option<String>,
    /// Raw spawnflags bitmask
    pub spawnflags: i32,

    pub origin: Vec3,
    pub angles: Vec3,

    pub target: Option<String>,
    pub targetname: Option<String>,
    pub pathtarget: Option<String>,
    pub deathtarget: Option<String>,
    pub killtarget: Option<String>,
    pub combattarget: Option<String>,
    pub message: Option<String>,
    /// Team key; entities sharing it are chained after the load
    pub team: Option<String>,
    pub map: Option<String>,

    pub speed: f32,
    pub accel: f32,
    pub decel: f32,
    pub wait: f32,
    pub delay: f32,
    pub random: f32,
    pub volume: f32,
    pub attenuation: f32,
    pub move_origin: Vec3,
    pub move_angles: Vec3,

    pub style: i32,
    pub count: i32,
    pub health: i32,
    pub sounds: i32,
    pub dmg: i32,
    pub mass: i32,

    /// Runtime flags
    pub flags: EntityFlags,
    /// Head of this entity's team chain (the head points at itself)
    pub team_master: Option<EntityId>,
    /// Next member of this entity's team chain
    pub team_chain: Option<EntityId>,
    /// Player client bound to this slot
    pub client: Option<ClientId>,
    /// Item archetype this entity was spawned as
    pub item: Option<ItemId>,
}

impl Entity {
    /// Classname as a string slice
    pub fn classname(&self) -> Option<&str> {
        self.classname.as_deref()
    }

    /// Load-time filter bits of `spawnflags`
    pub fn spawn_flags(&self) -> SpawnFlags {
        SpawnFlags::from_bits_truncate(self.spawnflags as u32)
    }

    /// Check if any of the given load-time bits are set
    pub fn has_spawn_flags(&self, flags: SpawnFlags) -> bool {
        self.spawn_flags().intersects(flags)
    }

    /// Clear load-time bits, leaving spawn-function bits untouched
    pub fn clear_spawn_flags(&mut self, flags: SpawnFlags) {
        self.spawnflags &= !(flags.bits() as i32);
    }

    /// Check if this entity is part of a team chain but not its head
    pub fn is_team_slave(&self) -> bool {
        self.flags.contains(EntityFlags::TEAM_SLAVE)
    }

    /// Team key, treating an empty string as no team
    pub fn team_key(&self) -> Option<&str> {
        self.team.as_deref().filter(|t| !t.is_empty())
    }
}
