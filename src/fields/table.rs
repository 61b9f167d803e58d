//! Field schema: maps entity string keys to typed entity fields

use bitflags::bitflags;
use std::fmt;
use std::sync::LazyLock;

use super::value::{parse_float, parse_int, parse_vector, unescape};
use crate::entity::{Entity, SpawnTemp, Vec3};

bitflags! {
    /// Per-field load flags
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct FieldFlags: u8 {
        /// Persistent field that can not be set from an entity string
        const NO_SPAWN = 1 << 0;
    }
}

/// Where a decoded value is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    /// The entity itself
    Entity,
    /// The per-record staging area, only visible to the spawn function
    Staging,
}

/// Typed location of a field value
pub enum Accessor<T> {
    Entity(fn(&mut Entity) -> &mut T),
    Staging(fn(&mut SpawnTemp) -> &mut T),
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Accessor<T> {}

impl<T> Accessor<T> {
    /// Which structure this accessor writes into
    pub fn target(&self) -> FieldTarget {
        match self {
            Accessor::Entity(_) => FieldTarget::Entity,
            Accessor::Staging(_) => FieldTarget::Staging,
        }
    }

    /// Borrow the addressed value
    pub fn get<'a>(&self, ent: &'a mut Entity, st: &'a mut SpawnTemp) -> &'a mut T {
        match self {
            Accessor::Entity(f) => f(ent),
            Accessor::Staging(f) => f(st),
        }
    }
}

/// Value kind of a field together with where it is stored
#[derive(Clone, Copy)]
pub enum FieldKind {
    /// Escaped string
    String(Accessor<Option<String>>),
    /// Three floats
    Vector(Accessor<Vec3>),
    Int(Accessor<i32>),
    Float(Accessor<f32>),
    /// A single yaw value stored as `[0, yaw, 0]`
    AngleHack(Accessor<Vec3>),
    /// Accepted and discarded
    Ignore,
}

impl FieldKind {
    /// Short name of the kind, for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::String(_) => "string",
            FieldKind::Vector(_) => "vector",
            FieldKind::Int(_) => "int",
            FieldKind::Float(_) => "float",
            FieldKind::AngleHack(_) => "anglehack",
            FieldKind::Ignore => "ignore",
        }
    }

    /// Target structure, or `None` for ignored fields
    pub fn target(&self) -> Option<FieldTarget> {
        match self {
            FieldKind::String(a) => Some(a.target()),
            FieldKind::Vector(a) | FieldKind::AngleHack(a) => Some(a.target()),
            FieldKind::Int(a) => Some(a.target()),
            FieldKind::Float(a) => Some(a.target()),
            FieldKind::Ignore => None,
        }
    }
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target() {
            Some(target) => write!(f, "{}({:?})", self.name(), target),
            None => write!(f, "{}", self.name()),
        }
    }
}

/// One decodable entity string key
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Key as written in the entity string (matched case-insensitively)
    pub name: &'static str,
    pub kind: FieldKind,
    pub flags: FieldFlags,
}

impl FieldDescriptor {
    /// Create a descriptor with no flags
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            flags: FieldFlags::empty(),
        }
    }

    /// Create a persistent-only descriptor that loading skips
    pub fn no_spawn(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Ignore,
            flags: FieldFlags::NO_SPAWN,
        }
    }

    /// Check if this field may be set from an entity string
    pub fn is_spawnable(&self) -> bool {
        !self.flags.contains(FieldFlags::NO_SPAWN)
    }

    /// Decode `value` and write it into the addressed location
    pub fn write(&self, value: &str, ent: &mut Entity, st: &mut SpawnTemp) {
        match self.kind {
            FieldKind::String(a) => *a.get(ent, st) = Some(unescape(value)),
            FieldKind::Vector(a) => *a.get(ent, st) = parse_vector(value),
            FieldKind::Int(a) => *a.get(ent, st) = parse_int(value),
            FieldKind::Float(a) => *a.get(ent, st) = parse_float(value),
            FieldKind::AngleHack(a) => *a.get(ent, st) = [0.0, parse_float(value), 0.0],
            FieldKind::Ignore => {}
        }
    }
}

/// Ordered field schema.
///
/// Lookup is a linear, case-insensitive scan; the first spawnable match wins.
#[derive(Debug, Clone)]
pub struct FieldTable {
    fields: Vec<FieldDescriptor>,
}

static STANDARD: LazyLock<FieldTable> = LazyLock::new(|| FieldTable::new(standard_fields()));

impl FieldTable {
    /// Create a table from descriptors in lookup order
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }

    /// The built-in schema for level entities
    pub fn standard() -> &'static FieldTable {
        &STANDARD
    }

    /// Find the spawnable descriptor for a key
    pub fn find(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|f| f.is_spawnable() && f.name.eq_ignore_ascii_case(key))
    }

    /// Decode one key/value pair. Returns false if no spawnable field matches.
    pub fn apply(&self, key: &str, value: &str, ent: &mut Entity, st: &mut SpawnTemp) -> bool {
        match self.find(key) {
            Some(field) => {
                field.write(value, ent, st);
                true
            }
            None => false,
        }
    }

    /// Iterate descriptors in lookup order
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    /// Number of descriptors
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the table has no descriptors
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Spawnable names that appear more than once (later copies are unreachable)
    pub fn duplicates(&self) -> Vec<&'static str> {
        let spawnable: Vec<&FieldDescriptor> = self.fields.iter().filter(|f| f.is_spawnable()).collect();
        let mut dups = Vec::new();

        for (i, field) in spawnable.iter().enumerate() {
            let repeated = spawnable[..i]
                .iter()
                .any(|earlier| earlier.name.eq_ignore_ascii_case(field.name));
            if repeated && !dups.iter().any(|d: &&str| d.eq_ignore_ascii_case(field.name)) {
                dups.push(field.name);
            }
        }

        dups
    }
}

macro_rules! field {
    ($name:literal, $kind:ident, ent.$field:ident) => {
        FieldDescriptor::new($name, FieldKind::$kind(Accessor::Entity(|e| &mut e.$field)))
    };
    ($name:literal, $kind:ident, st.$field:ident) => {
        FieldDescriptor::new($name, FieldKind::$kind(Accessor::Staging(|s| &mut s.$field)))
    };
}

fn standard_fields() -> Vec<FieldDescriptor> {
    vec![
        field!("classname", String, ent.classname),
        field!("model", String, ent.model),
        field!("spawnflags", Int, ent.spawnflags),
        field!("speed", Float, ent.speed),
        field!("accel", Float, ent.accel),
        field!("decel", Float, ent.decel),
        field!("target", String, ent.target),
        field!("targetname", String, ent.targetname),
        field!("pathtarget", String, ent.pathtarget),
        field!("deathtarget", String, ent.deathtarget),
        field!("killtarget", String, ent.killtarget),
        field!("combattarget", String, ent.combattarget),
        field!("message", String, ent.message),
        field!("team", String, ent.team),
        field!("wait", Float, ent.wait),
        field!("delay", Float, ent.delay),
        field!("random", Float, ent.random),
        field!("move_origin", Vector, ent.move_origin),
        field!("move_angles", Vector, ent.move_angles),
        field!("style", Int, ent.style),
        field!("count", Int, ent.count),
        field!("health", Int, ent.health),
        field!("sounds", Int, ent.sounds),
        FieldDescriptor::new("light", FieldKind::Ignore),
        field!("dmg", Int, ent.dmg),
        field!("mass", Int, ent.mass),
        field!("volume", Float, ent.volume),
        field!("attenuation", Float, ent.attenuation),
        field!("map", String, ent.map),
        field!("origin", Vector, ent.origin),
        field!("angles", Vector, ent.angles),
        field!("angle", AngleHack, ent.angles),
        // runtime links, written by the loader and spawn functions only
        FieldDescriptor::no_spawn("goalentity"),
        FieldDescriptor::no_spawn("movetarget"),
        FieldDescriptor::no_spawn("enemy"),
        FieldDescriptor::no_spawn("oldenemy"),
        FieldDescriptor::no_spawn("activator"),
        FieldDescriptor::no_spawn("groundentity"),
        FieldDescriptor::no_spawn("teamchain"),
        FieldDescriptor::no_spawn("teammaster"),
        FieldDescriptor::no_spawn("owner"),
        FieldDescriptor::no_spawn("target_ent"),
        FieldDescriptor::no_spawn("chain"),
        FieldDescriptor::no_spawn("item"),
        FieldDescriptor::no_spawn("flags"),
        // spawn-time only
        field!("lip", Int, st.lip),
        field!("distance", Int, st.distance),
        field!("height", Int, st.height),
        field!("noise", String, st.noise),
        field!("pausetime", Float, st.pausetime),
        field!("item", String, st.item),
        field!("gravity", String, st.gravity),
        field!("sky", String, st.sky),
        field!("skyrotate", Float, st.skyrotate),
        field!("skyaxis", Vector, st.skyaxis),
        field!("minyaw", Float, st.minyaw),
        field!("maxyaw", Float, st.maxyaw),
        field!("minpitch", Float, st.minpitch),
        field!("maxpitch", Float, st.maxpitch),
        field!("nextmap", String, st.nextmap),
    ]
}
