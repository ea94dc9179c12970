use std::fs;

use tempfile::TempDir;

use super::*;
use crate::config::AnalysisMode;

#[test]
fn color_choices_map_to_modes() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn no_config_returns_defaults_even_with_path() {
    let config = load_config(Some(Path::new("/does/not/exist.toml")), true).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn explicit_path_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("guard.toml");
    fs::write(&path, "[analysis]\nmode = \"basic\"\n").unwrap();

    let config = load_config(Some(&path), false).unwrap();

    assert_eq!(config.analysis.mode, AnalysisMode::Basic);
}

#[test]
fn missing_explicit_path_is_an_error() {
    let dir = TempDir::new().unwrap();

    let result = load_config(Some(&dir.path().join("missing.toml")), false);

    assert!(result.is_err());
}

#[test]
fn write_output_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reports/nested/out.json");

    write_output(Some(&path), "{}\n", true).unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), "{}\n");
}

#[test]
fn write_output_to_stdout_when_quiet_is_a_no_op() {
    assert!(write_output(None, "ignored", true).is_ok());
}
