//! Built-in spawn functions

use tracing::debug;

use crate::entity::{EntityId, ItemId};
use crate::level::WorldSettings;

use super::{ItemDef, SpawnContext};

/// Sky used when the world names none
pub const DEFAULT_SKY: &str = "unit1_";

/// Gravity used when the world names none
pub const DEFAULT_GRAVITY: &str = "800";

/// Light style animations installed by the world, indexed by style number.
///
/// Each letter is one tenth of a second; `a` is dark, `m` normal, `z` double bright.
pub const LIGHT_STYLES: &[(u8, &str)] = &[
    (0, "m"),
    (1, "mmnmmommommnonmmonqnmmo"),
    (2, "abcdefghijklmnopqrstuvwxyzyxwvutsrqponmlkjihgfedcba"),
    (3, "mmmmmaaaaammmmmaaaaaabcdefgabcdefg"),
    (4, "mamamamamama"),
    (5, "jklmnopqrstuvwxyzyxwvutsrqponmlkj"),
    (6, "nmonqnmomnmomomno"),
    (7, "mmmaaaabcdefgmmmmaaaammmaamm"),
    (8, "mmmaaammmaaammmabcdefaaaammmmabcdefmmmaaaa"),
    (9, "aaaaaaaazzzzzzzz"),
    (10, "mmamammmmammamamaaamammma"),
    (11, "abcdefghijklmnopqrrqponmlkjihgfedcba"),
    // styles 32-62 are assigned by the light compiler for switchable lights
    (63, "a"),
];

/// Publish level-wide settings from the world record
pub fn worldspawn(ctx: &mut SpawnContext<'_>, id: EntityId) {
    let (message, sounds) = match ctx.pool.get_mut(id) {
        Some(ent) => {
            ent.in_use = true;
            (ent.message.clone(), ent.sounds)
        }
        None => return,
    };

    let st = ctx.spawn_temp;
    let level_name = message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| ctx.level.map_name.clone());

    ctx.level.world = WorldSettings {
        level_name,
        next_map: st.nextmap.clone(),
        sky: st
            .sky
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SKY.to_string()),
        sky_rotate: st.skyrotate,
        sky_axis: st.skyaxis,
        cd_track: sounds,
        gravity: st
            .gravity
            .clone()
            .unwrap_or_else(|| DEFAULT_GRAVITY.to_string()),
        light_styles: LIGHT_STYLES
            .iter()
            .map(|(style, pattern)| (*style, pattern.to_string()))
            .collect(),
    };

    debug!(
        "world '{}' sky {} gravity {}",
        ctx.level.world.level_name, ctx.level.world.sky, ctx.level.world.gravity
    );
}

/// Health pickups; the classname picks how much they heal
pub fn item_health(ctx: &mut SpawnContext<'_>, id: EntityId) {
    let health = ctx.items.find_by_pickup_name("Health").map(|(item, _)| item);
    let Some(ent) = ctx.pool.get_mut(id) else {
        return;
    };

    let amount = match ent.classname() {
        Some("item_health_small") => 2,
        Some("item_health_large") => 25,
        Some("item_health_mega") => 100,
        _ => 10,
    };
    ent.count = amount;
    ent.item = health;
}

/// Positional marker with no runtime presence
pub fn info_null(ctx: &mut SpawnContext<'_>, id: EntityId) {
    ctx.free(id);
}

/// Spawn function for classnames that need nothing beyond their decoded fields
pub fn inert(_ctx: &mut SpawnContext<'_>, id: EntityId) {
    debug!("entity {} spawned inert", id);
}

/// Default item handler: bind the archetype to the entity
pub fn spawn_item(ctx: &mut SpawnContext<'_>, id: EntityId, item_id: ItemId, item: &ItemDef) {
    if let Some(ent) = ctx.pool.get_mut(id) {
        ent.item = Some(item_id);
        debug!("entity {} is item '{}'", id, item.pickup_name);
    }
}
