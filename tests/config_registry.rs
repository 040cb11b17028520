//! Building registries from configuration files.

use std::fs;
use std::path::PathBuf;

use unilog::config::{load_config, parse_config, ConfigError};
use unilog::{Registry, Severity};

fn temp_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("unilog-{}-{}.toml", name, std::process::id()));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_registry_from_file() {
    let path = temp_config(
        "from-file",
        r#"
        [defaults]
        level = "Info"
        format = "{level}|{name}|{message}"
        time_format = ""

        [levels]
        net = "Debug"
        db = "Loudest"
        "#,
    );

    let config = load_config(&path).unwrap();
    let registry = Registry::from_config(&config).unwrap();

    assert_eq!(registry.get_logger("net").level(), Severity::Debug);
    // Unknown level name: same threshold as a logger created from defaults.
    assert_eq!(registry.get_logger("db").level(), Severity::Info);
    // Created after configuration: picks up the configured defaults.
    let fresh = registry.get_logger("ui");
    assert_eq!(fresh.level(), Severity::Info);
    assert_eq!(fresh.render(Severity::Info, "ready"), "Info|ui|ready");

    fs::remove_file(path).unwrap_or_default();
}

#[test]
fn test_invalid_defaults_rejected() {
    let err = parse_config(
        r#"
        [defaults]
        format = "{name"
        time_format = "%Q"
        "#,
    )
    .unwrap_err();

    match err {
        ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn test_escalating_defaults() {
    let config = parse_config("[defaults]\nescalate_errors = true\ntime_format = \"\"").unwrap();
    let registry = Registry::from_config(&config).unwrap();
    let err = registry.get_logger("strict").error("bad state").unwrap_err();
    assert_eq!(err.line(), "strict:Error bad state");
}
