//! Classnames handled by dedicated spawn functions

/// Every classname with its own spawn function, in lookup order.
///
/// Item pickups are not listed here; they resolve through the
/// [`ItemRegistry`](super::ItemRegistry) first.
pub const STANDARD_CLASSNAMES: &[&str] = &[
    "item_health",
    "item_health_small",
    "item_health_large",
    "item_health_mega",
    "info_player_start",
    "info_player_deathmatch",
    "info_player_coop",
    "info_player_intermission",
    "func_plat",
    "func_button",
    "func_door",
    "func_door_secret",
    "func_door_rotating",
    "func_rotating",
    "func_train",
    "func_water",
    "func_conveyor",
    "func_areaportal",
    "func_clock",
    "func_wall",
    "func_object",
    "func_timer",
    "func_explosive",
    "func_killbox",
    "func_object_repair",
    "rotating_light",
    "trigger_always",
    "trigger_once",
    "trigger_multiple",
    "trigger_relay",
    "trigger_push",
    "trigger_hurt",
    "trigger_key",
    "trigger_counter",
    "trigger_elevator",
    "trigger_gravity",
    "trigger_monsterjump",
    "target_temp_entity",
    "target_speaker",
    "target_explosion",
    "target_changelevel",
    "target_secret",
    "target_goal",
    "target_splash",
    "target_spawner",
    "target_blaster",
    "target_crosslevel_trigger",
    "target_crosslevel_target",
    "target_laser",
    "target_help",
    "target_lightramp",
    "target_earthquake",
    "target_character",
    "target_string",
    "target_mal_laser",
    "worldspawn",
    "viewthing",
    "light",
    "light_mine1",
    "light_mine2",
    "info_null",
    "func_group",
    "info_notnull",
    "path_corner",
    "point_combat",
    "misc_explobox",
    "misc_banner",
    "misc_satellite_dish",
    "misc_gib_arm",
    "misc_gib_leg",
    "misc_gib_head",
    "misc_insane",
    "misc_deadsoldier",
    "misc_viper",
    "misc_viper_bomb",
    "misc_bigviper",
    "misc_strogg_ship",
    "misc_teleporter",
    "misc_teleporter_dest",
    "misc_blackhole",
    "misc_eastertank",
    "misc_easterchick",
    "misc_easterchick2",
    "misc_crashviper",
    "misc_viper_missile",
    "misc_amb4",
    "misc_transport",
    "misc_nuke",
    "monster_berserk",
    "monster_gladiator",
    "monster_gunner",
    "monster_infantry",
    "monster_soldier_light",
    "monster_soldier",
    "monster_soldier_ss",
    "monster_tank",
    "monster_tank_commander",
    "monster_medic",
    "monster_flipper",
    "monster_chick",
    "monster_parasite",
    "monster_flyer",
    "monster_brain",
    "monster_floater",
    "monster_hover",
    "monster_mutant",
    "monster_supertank",
    "monster_boss2",
    "monster_boss3_stand",
    "monster_makron",
    "monster_jorg",
    "monster_commander_body",
    "monster_soldier_hypergun",
    "monster_soldier_lasergun",
    "monster_soldier_ripper",
    "monster_fixbot",
    "monster_gekk",
    "monster_chick_heat",
    "monster_gladb",
    "monster_boss5",
    "turret_breach",
    "turret_base",
    "turret_driver",
];
