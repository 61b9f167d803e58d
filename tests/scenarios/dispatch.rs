//! Classname dispatch scenarios

use entspawn::diagnostics::Diagnostic;
use entspawn::entity::EntityId;

use crate::harness::{SpawnCall, TestLoader};

#[test]
fn test_first_record_binds_to_world_slot() {
    let mut loader = TestLoader::new();
    let summary = loader
        .load("q2dm1", r#"{ "classname" "item_health" } { "classname" "worldspawn" }"#)
        .unwrap();

    let calls = loader.calls();
    assert_eq!(calls[0].id, EntityId::WORLD);
    assert_eq!(calls[0].classname, "item_health");
    assert_ne!(calls[1].id, EntityId::WORLD);

    let world = loader.entity(EntityId::WORLD);
    assert_eq!(world.classname(), Some("item_health"));
    assert_eq!(world.count, 10);
    assert_eq!(summary.spawned, 2);
}

#[test]
fn test_items_resolve_before_spawn_functions() {
    let mut loader = TestLoader::new();
    loader
        .load(
            "base1",
            r#"{ "classname" "worldspawn" } { "classname" "weapon_shotgun" "origin" "0 0 16" }"#,
        )
        .unwrap();

    let (id, shotgun) = loader.one("weapon_shotgun");
    assert_eq!(shotgun.origin, [0.0, 0.0, 16.0]);

    let item = shotgun.item.unwrap();
    let calls = loader.calls();
    assert_eq!(
        calls[1],
        SpawnCall {
            id,
            classname: "weapon_shotgun".to_string(),
            item: Some(item),
        }
    );
}

#[test]
fn test_unresolved_classname_stays_inert() {
    let mut loader = TestLoader::new();
    let summary = loader
        .load(
            "base1",
            r#"{ "classname" "worldspawn" } { "classname" "monster_shambler" "targetname" "boss" }"#,
        )
        .unwrap();

    assert_eq!(loader.classnames(), ["worldspawn"]);
    assert_eq!(summary.unresolved, 1);

    let (id, shambler) = loader.one("monster_shambler");
    assert!(shambler.in_use);
    assert_eq!(shambler.targetname.as_deref(), Some("boss"));
    assert_eq!(
        summary.diagnostics,
        vec![Diagnostic::UnresolvedClassname {
            classname: "monster_shambler".to_string(),
            entity: id,
        }]
    );
}

#[test]
fn test_classname_lookup_is_case_sensitive() {
    let mut loader = TestLoader::new();
    let summary = loader
        .load("base1", r#"{ "classname" "worldspawn" } { "classname" "Light" }"#)
        .unwrap();
    assert_eq!(summary.unresolved, 1);
    assert_eq!(loader.classnames(), ["worldspawn"]);
}

#[test]
fn test_missing_classname_is_freed() {
    let mut loader = TestLoader::new();
    let summary = loader
        .load("base1", r#"{ "classname" "worldspawn" } { "origin" "1 2 3" }"#)
        .unwrap();

    let id = EntityId(2);
    assert!(!loader.entity(id).in_use);
    assert_eq!(
        summary.diagnostics,
        vec![Diagnostic::MissingClassname { entity: id }]
    );
}

#[test]
fn test_spawn_function_may_free_itself() {
    let mut loader = TestLoader::new();
    loader
        .load("base1", r#"{ "classname" "worldspawn" } { "classname" "info_null" }"#)
        .unwrap();
    assert_eq!(loader.classnames(), ["worldspawn", "info_null"]);
    assert!(loader.find("info_null").is_empty());
}

#[test]
fn test_reload_discards_previous_level() {
    let mut loader = TestLoader::new();
    loader
        .load("base1", r#"{ "classname" "worldspawn" } { "classname" "light" } { "classname" "light" }"#)
        .unwrap();
    assert_eq!(loader.find("light").len(), 2);

    loader
        .load("base2", r#"{ "classname" "worldspawn" "message" "Installation" }"#)
        .unwrap();
    assert!(loader.find("light").is_empty());
    assert_eq!(loader.spawner.level().world.level_name, "Installation");
    assert_eq!(loader.spawner.pool().num_entities(), 2);
}
