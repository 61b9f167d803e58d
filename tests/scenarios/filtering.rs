//! Game mode, skill and override filtering scenarios

use entspawn::diagnostics::Diagnostic;
use entspawn::entity::SpawnFlags;
use entspawn::level::GameRules;
use entspawn::loader::{OverrideAction, OverrideMode, OverrideRule, OverrideTable};

use crate::harness::TestLoader;

const SKILLED: &str = r#"
{ "classname" "worldspawn" }
{ "classname" "monster_soldier" "targetname" "easy_only" "spawnflags" "1536" }
{ "classname" "monster_soldier" "targetname" "not_easy" "spawnflags" "256" }
{ "classname" "monster_tank" "targetname" "not_hard" "spawnflags" "1024" }
{ "classname" "item_armor_body" "spawnflags" "2048" }
"#;

fn targetnames(loader: &TestLoader) -> Vec<String> {
    loader
        .spawner
        .pool()
        .live()
        .filter_map(|(_, e)| e.targetname.clone())
        .collect()
}

#[test]
fn test_skill_clamped_and_persisted() {
    let mut loader = TestLoader::with_rules(GameRules {
        skill: 7.0,
        ..Default::default()
    });
    let summary = loader.load("base1", SKILLED).unwrap();

    assert_eq!(loader.spawner.rules().skill, 3.0);
    assert!(summary
        .diagnostics
        .contains(&Diagnostic::SkillClamped { from: 7.0, to: 3.0 }));

    // skill 3 uses the hard mask
    assert_eq!(targetnames(&loader), ["not_easy"]);
    assert_eq!(summary.inhibited, 2);

    // the corrected value is kept, so the next load is quiet
    let summary = loader.load("base1", SKILLED).unwrap();
    assert!(summary.diagnostics.is_empty());
}

#[test]
fn test_skill_masks() {
    for (skill, expected) in [
        (0.0, vec!["easy_only", "not_hard"]),
        (1.0, vec!["not_easy", "not_hard"]),
        (2.0, vec!["not_easy"]),
    ] {
        let mut loader = TestLoader::with_rules(GameRules {
            skill,
            ..Default::default()
        });
        loader.load("base1", SKILLED).unwrap();
        assert_eq!(targetnames(&loader), expected, "skill {}", skill);
    }
}

#[test]
fn test_deathmatch_ignores_skill() {
    let mut loader = TestLoader::with_rules(GameRules {
        deathmatch: true,
        skill: 0.0,
        ..Default::default()
    });
    let summary = loader.load("q2dm1", SKILLED).unwrap();

    assert_eq!(targetnames(&loader), ["easy_only", "not_easy", "not_hard"]);
    assert!(loader.find("item_armor_body").is_empty());
    assert_eq!(summary.inhibited, 1);
}

#[test]
fn test_load_only_flags_stripped() {
    let mut loader = TestLoader::new();
    loader
        .load(
            "base1",
            r#"{ "classname" "worldspawn" "spawnflags" "2048" } { "classname" "func_door" "spawnflags" "6177" }"#,
        )
        .unwrap();

    let (_, door) = loader.one("func_door");
    assert_eq!(door.spawnflags, 33);
    assert!(!door.has_spawn_flags(SpawnFlags::LOAD_ONLY));
    // the world keeps its flags
    assert_eq!(loader.spawner.pool().world().spawnflags, 2048);
}

const XSEWER1: &str = r#"
{ "classname" "worldspawn" }
{ "classname" "trigger_relay" "target" "t3" "targetname" "t2" }
{ "classname" "trigger_relay" "target" "t3" "targetname" "t9" }
{ "classname" "func_button" "target" "t16" "model" "*71" }
{ "classname" "trigger_once" "model" "*3" }
"#;

#[test]
fn test_xsewer1_coop_overrides() {
    let mut loader = TestLoader::with_rules(GameRules {
        coop: true,
        ..Default::default()
    });
    let summary = loader.load("XSEWER1", XSEWER1).unwrap();

    assert_eq!(summary.inhibited, 1);
    let relays = loader.find("trigger_relay");
    assert_eq!(relays.len(), 1);
    assert_eq!(relays[0].1.targetname.as_deref(), Some("t9"));

    let (_, button) = loader.one("func_button");
    assert_eq!(
        button.message.as_deref(),
        Some("Overflow valve maintenance\nhatch A opened.")
    );
    let (_, trigger) = loader.one("trigger_once");
    assert_eq!(
        trigger.message.as_deref(),
        Some("Overflow valve maintenance\nhatch B opened.")
    );
}

#[test]
fn test_xsewer1_single_player_untouched() {
    let mut loader = TestLoader::new();
    let summary = loader.load("xsewer1", XSEWER1).unwrap();
    assert_eq!(summary.inhibited, 0);
    assert_eq!(loader.find("trigger_relay").len(), 2);
    assert_eq!(loader.one("func_button").1.message, None);
}

#[test]
fn test_command_hard_trigger_kept() {
    let src = r#"
{ "classname" "worldspawn" }
{ "classname" "trigger_once" "model" "*27" "spawnflags" "1024" }
{ "classname" "trigger_once" "model" "*28" "spawnflags" "1024" }
"#;
    let mut loader = TestLoader::with_rules(GameRules {
        skill: 2.0,
        ..Default::default()
    });
    loader.load("command", src).unwrap();

    let triggers = loader.find("trigger_once");
    assert_eq!(triggers.len(), 1);
    assert_eq!(triggers[0].1.model.as_deref(), Some("*27"));
}

#[test]
fn test_configured_override() {
    let mut overrides = OverrideTable::standard();
    overrides.push(
        OverrideRule::new("base1", OverrideMode::Always, OverrideAction::Inhibit)
            .classname("monster_tank"),
    );
    let mut loader = TestLoader::new().with_overrides(overrides);
    let summary = loader.load("base1", SKILLED).unwrap();

    assert!(loader.find("monster_tank").is_empty());
    assert_eq!(summary.inhibited, 2);
}

#[test]
fn test_inhibit_override_never_drops_world() {
    let mut overrides = OverrideTable::new();
    overrides.push(
        OverrideRule::new("base1", OverrideMode::Always, OverrideAction::Inhibit)
            .classname("worldspawn"),
    );
    overrides.push(
        OverrideRule::new(
            "base1",
            OverrideMode::Always,
            OverrideAction::SetMessage("Renamed".to_string()),
        )
        .classname("worldspawn"),
    );
    let mut loader = TestLoader::new().with_overrides(overrides);
    let summary = loader
        .load("base1", r#"{ "classname" "worldspawn" } { "classname" "light" }"#)
        .unwrap();

    assert_eq!(summary.inhibited, 0);
    assert_eq!(loader.classnames(), ["worldspawn", "light"]);
    assert!(loader.spawner.pool().world().in_use);
    // other actions of the same pass still apply
    assert_eq!(loader.spawner.level().world.level_name, "Renamed");
}
