//! Unit tests for config module

use std::fs;

use ansi_highlight::Config;
use tempfile::TempDir;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert!(!config.parser.double_underline);
    assert_eq!(config.decorations.escape_opacity, "50%");
    assert_eq!(config.decorations.faint_opacity, "50%");
}

#[test]
fn config_serialization_roundtrip() {
    let mut config = Config::default();
    config.decorations.faint_opacity = "70%".to_string();
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn partial_config_uses_defaults() {
    let toml_str = r#"
[parser]
double_underline = true
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert!(config.parser.double_underline);
    assert_eq!(config.decorations.escape_opacity, "50%");
}

#[test]
fn empty_config_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn parser_options_follow_config() {
    let mut config = Config::default();
    assert!(!config.parser_options().double_underline);
    config.parser.double_underline = true;
    assert!(config.parser_options().double_underline);
}

#[test]
fn load_from_missing_file_returns_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn save_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("dir").join("config.toml");

    let mut config = Config::default();
    config.decorations.escape_opacity = "25%".to_string();
    config.save_to(&path).unwrap();

    assert!(path.exists());
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn load_rejects_malformed_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[parser\ndouble_underline = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn load_rejects_invalid_opacity() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[decorations]\nescape_opacity = \"150%\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("escape_opacity"));
}

#[test]
fn opacity_validation() {
    let mut config = Config::default();
    assert!(config.decorations.validate().is_ok());

    for bad in ["50", "-1%", "abc%", "100.5%"] {
        config.decorations.faint_opacity = bad.to_string();
        assert!(config.decorations.validate().is_err(), "{}", bad);
    }

    config.decorations.faint_opacity = "0%".to_string();
    assert!(config.decorations.validate().is_ok());
    config.decorations.faint_opacity = "12.5%".to_string();
    assert!(config.decorations.validate().is_ok());
}

#[test]
fn config_path_is_under_config_dir() {
    if let (Ok(dir), Ok(path)) = (Config::config_dir(), Config::config_path()) {
        assert!(path.starts_with(&dir));
        assert!(dir.ends_with("ansi-highlight"));
        assert_eq!(path.file_name().unwrap(), "config.toml");
    }
}
