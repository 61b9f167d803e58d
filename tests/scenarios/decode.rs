//! Record decoding scenarios

use entspawn::diagnostics::Diagnostic;
use entspawn::entity::{Entity, EntityId};
use entspawn::fields::{encode_entity, encode_pool, EncodeError, FieldTable};

use crate::harness::TestLoader;

const BASE: &str = r#"
// base1 excerpt
{
"classname" "worldspawn"
"message" "Outer Base"
"sounds" "7"
}
{
"classname" "func_door"
"angle" "-1"
"targetname" "t1"
"speed" "120"
"wait" "-1"
"lip" "16"
"_minlight" "0.2"
"origin" "128 -64"
}
{
"classname" "light"
"light" "300"
"style" "1"
"colour" "1 0 0"
}
"#;

#[test]
fn test_typed_decode_with_warnings() {
    let mut loader = TestLoader::new();
    let summary = loader.load("base1", BASE).unwrap();

    assert_eq!(loader.classnames(), ["worldspawn", "func_door", "light"]);

    let (_, door) = loader.one("func_door");
    assert_eq!(door.angles, [0.0, -1.0, 0.0]);
    assert_eq!(door.targetname.as_deref(), Some("t1"));
    assert_eq!(door.speed, 120.0);
    assert_eq!(door.wait, -1.0);
    // missing vector components are zero
    assert_eq!(door.origin, [128.0, -64.0, 0.0]);

    let (_, light) = loader.one("light");
    assert_eq!(light.style, 1);

    assert_eq!(
        summary.diagnostics,
        vec![Diagnostic::UnknownField {
            key: "colour".to_string(),
            value: "1 0 0".to_string(),
            line: 22,
        }]
    );
    assert_eq!(loader.spawner.level().world.cd_track, 7);
}

#[test]
fn test_field_names_case_insensitive() {
    let mut loader = TestLoader::new();
    loader
        .load(
            "base1",
            r#"{ "classname" "worldspawn" } { "ClassName" "path_corner" "TARGETNAME" "p1" }"#,
        )
        .unwrap();
    let (_, corner) = loader.one("path_corner");
    assert_eq!(corner.targetname.as_deref(), Some("p1"));
}

#[test]
fn test_string_escapes() {
    let mut loader = TestLoader::new();
    loader
        .load(
            "base1",
            r#"{ "classname" "worldspawn" } { "classname" "target_help" "message" "line one\nC:\path\" }"#,
        )
        .unwrap();
    let (_, help) = loader.one("target_help");
    assert_eq!(help.message.as_deref(), Some("line one\nC:\\path\\"));
}

#[test]
fn test_empty_record_is_zeroed_and_freed() {
    let mut loader = TestLoader::new();
    let summary = loader
        .load("base1", r#"{ "classname" "worldspawn" } { } { "classname" "info_notnull" }"#)
        .unwrap();

    assert_eq!(loader.classnames(), ["worldspawn", "info_notnull"]);
    assert_eq!(
        summary.diagnostics,
        vec![Diagnostic::MissingClassname {
            entity: EntityId(2)
        }]
    );
    // the freed slot is handed out again
    assert_eq!(loader.one("info_notnull").0, EntityId(2));
}

#[test]
fn test_empty_world_record() {
    let mut loader = TestLoader::new();
    let summary = loader.load("base1", "{ }").unwrap();
    assert_eq!(loader.entity(EntityId::WORLD), &Entity::default());

    let missing = Diagnostic::MissingClassname {
        entity: EntityId::WORLD,
    };
    assert_eq!(summary.diagnostics, vec![missing.clone()]);
    assert_eq!(missing.to_string(), "world record has no classname");
}

#[test]
fn test_encode_round_trip() {
    let mut loader = TestLoader::new();
    loader.load("base1", BASE).unwrap();
    let (_, door) = loader.one("func_door");

    let encoded = encode_entity(&door, FieldTable::standard()).unwrap();
    let mut again = TestLoader::new();
    again
        .load("base1", &format!("{{ \"classname\" \"worldspawn\" }}\n{}", encoded))
        .unwrap();

    let (_, decoded) = again.one("func_door");
    assert_eq!(decoded, door);
}

#[test]
fn test_encode_round_trip_newline_message() {
    let mut loader = TestLoader::new();
    loader
        .load(
            "base1",
            r#"{ "classname" "worldspawn" } { "classname" "trigger_once" "message" "You need\nthe key" }"#,
        )
        .unwrap();
    let (_, trigger) = loader.one("trigger_once");
    assert_eq!(trigger.message.as_deref(), Some("You need\nthe key"));

    let encoded = encode_entity(&trigger, FieldTable::standard()).unwrap();
    assert!(encoded.contains(r#""message" "You need\nthe key""#));
}

#[test]
fn test_encode_round_trip_quote_in_bare_word() {
    let mut loader = TestLoader::new();
    loader
        .load(
            "base1",
            r#"{ "classname" "worldspawn" } { "classname" "trigger_once" "message" say"hi }"#,
        )
        .unwrap();
    let (_, trigger) = loader.one("trigger_once");
    assert_eq!(trigger.message.as_deref(), Some("say\"hi"));

    let encoded = encode_entity(&trigger, FieldTable::standard()).unwrap();
    let mut again = TestLoader::new();
    again
        .load("base1", &format!("{{ \"classname\" \"worldspawn\" }}\n{}", encoded))
        .unwrap();
    assert_eq!(again.one("trigger_once").1, trigger);
}

#[test]
fn test_encode_rejects_quote_with_space() {
    let trigger = Entity {
        classname: Some("trigger_once".to_string()),
        message: Some("say \"hi\"".to_string()),
        ..Default::default()
    };
    let err = encode_entity(&trigger, FieldTable::standard()).unwrap_err();
    assert_eq!(
        err,
        EncodeError {
            field: "message",
            value: "say \"hi\"".to_string(),
        }
    );
}

#[test]
fn test_dumped_pool_reloads_identically() {
    let src = format!(
        "{}{}",
        BASE,
        r#"{ "classname" "func_door" "team" "d1" "message" "Locked" }
{ "classname" "func_door" "team" "d1" }
{ "classname" "item_health" "origin" "0 0 16" }"#
    );
    let mut loader = TestLoader::new();
    let summary = loader.load("base1", &src).unwrap();
    assert_eq!(summary.teams, 1);

    let dump = encode_pool(loader.spawner.pool(), FieldTable::standard()).unwrap();
    let mut again = TestLoader::new();
    again.load("base1", &dump).unwrap();

    assert_eq!(again.classnames(), loader.classnames());
    let first: Vec<_> = loader.spawner.pool().live().collect();
    let second: Vec<_> = again.spawner.pool().live().collect();
    assert_eq!(first, second);
}
