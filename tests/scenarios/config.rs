//! Configuration loading

use std::io::Write;

use entspawn::loader::OverrideAction;
use entspawn::Config;

use crate::harness::TestLoader;

#[test]
fn test_config_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[rules]
skill = 0.0
max_entities = 64

[[overrides]]
map = "base1"
classname = "light"
targetname = "flicker"
action = {{ set_message = "broken" }}
"#
    )
    .unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.rules.skill, 0.0);
    assert_eq!(config.rules.max_entities, 64);
    assert_eq!(
        config.overrides[0].action,
        OverrideAction::SetMessage("broken".to_string())
    );

    let mut loader = TestLoader::with_rules(config.rules.clone()).with_overrides(config.override_table());
    loader
        .load(
            "base1",
            r#"{ "classname" "worldspawn" } { "classname" "light" "targetname" "flicker" }"#,
        )
        .unwrap();
    assert_eq!(loader.one("light").1.message.as_deref(), Some("broken"));
    assert_eq!(loader.spawner.pool().capacity(), 64);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
    assert_eq!(config.rules.skill, 1.0);
    assert!(config.overrides.is_empty());
}

#[test]
fn test_invalid_file_rejected() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[rules]\nskill = \"hard\"").unwrap();
    assert!(Config::load(Some(file.path())).is_err());
}
