use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use dexterm::config::{Config, ConfigError};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn default_values() {
    let config = Config::default();
    assert_eq!(config.lookup.base_url, "https://pokeapi.co/api/v2");
    assert_eq!(config.lookup.debounce_ms, 500);
    assert_eq!(config.lookup.connect_timeout_seconds, 5);
}

#[test]
fn config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("dexterm/config.toml"));
}

#[test]
fn missing_file_uses_defaults() {
    let config =
        Config::load_from(Path::new("/nonexistent/dexterm-test/config.toml")).expect("load");
    assert_eq!(config.lookup.debounce_ms, 500);
}

#[test]
fn empty_file_uses_defaults() {
    let file = write_config("");
    let config = Config::load_from(file.path()).expect("load");
    assert_eq!(config.lookup.base_url, "https://pokeapi.co/api/v2");
    assert_eq!(config.lookup.debounce_ms, 500);
}

#[test]
fn parses_overrides_and_trims_trailing_slash() {
    let file = write_config(
        r#"
[lookup]
base_url = "http://localhost:9999/api/"
debounce_ms = 250
"#,
    );
    let config = Config::load_from(file.path()).expect("load");
    assert_eq!(config.lookup.base_url, "http://localhost:9999/api");
    assert_eq!(config.lookup.debounce_ms, 250);
    // Unspecified fields keep their defaults
    assert_eq!(config.lookup.connect_timeout_seconds, 5);
}

#[test]
fn rejects_invalid_toml() {
    let file = write_config("this is {{ not toml");
    let err = Config::load_from(file.path()).expect_err("must fail");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn rejects_zero_debounce() {
    let file = write_config(
        r#"
[lookup]
debounce_ms = 0
"#,
    );
    let err = Config::load_from(file.path()).expect_err("must fail");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn rejects_slash_only_base_url() {
    // A bare "/" trims down to an empty URL
    let file = write_config(
        r#"
[lookup]
base_url = "/"
"#,
    );
    let err = Config::load_from(file.path()).expect_err("must fail");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
