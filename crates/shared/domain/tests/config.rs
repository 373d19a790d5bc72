use kata_domain::config::{DiceConfig, KataConfig, LoggingConfig};
use kata_domain::error::ErrorKind;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let dice = DiceConfig::default();
    assert_eq!(dice.sides, 6);
    assert!(dice.seed.is_none());

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(logging.path.is_none());
    assert!(!logging.json);

    let cfg = KataConfig::default();
    assert_eq!(cfg.dice, dice);
    assert_eq!(cfg.logging, logging);
}

#[test]
fn kata_config_deserializes() {
    let raw = json!({
        "dice": { "sides": 20, "seed": 42 },
        "logging": { "level": "debug", "console": false, "path": "/tmp/kata-logs", "json": true }
    });

    let cfg: KataConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.dice.sides, 20);
    assert_eq!(cfg.dice.seed, Some(42));
    assert_eq!(cfg.logging.level, "debug");
    assert!(!cfg.logging.console);
    assert_eq!(cfg.logging.path, Some(std::path::PathBuf::from("/tmp/kata-logs")));
    assert!(cfg.logging.json);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let cfg: KataConfig =
        serde_json::from_value(json!({ "dice": { "seed": 7 } })).expect("config deserialize");
    assert_eq!(cfg.dice.sides, 6);
    assert_eq!(cfg.dice.seed, Some(7));
    assert_eq!(cfg.logging, LoggingConfig::default());
}

#[test]
fn cloned_config_is_copy_on_write() {
    let original = KataConfig::default();
    let mut changed = original.clone();
    changed.dice.sides = 12;

    assert_eq!(original.dice.sides, 6);
    assert_eq!(changed.dice.sides, 12);
}

#[test]
fn error_kind_names() {
    assert_eq!(ErrorKind::Type.to_string(), "type");
    assert_eq!(ErrorKind::LengthMismatch.as_ref(), "length_mismatch");
    assert_eq!(serde_json::to_value(ErrorKind::DivideByZero).unwrap(), json!("divide_by_zero"));
}
