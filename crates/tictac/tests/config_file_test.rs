//! Loading configuration from disk.

use std::io::Write;
use std::path::PathBuf;
use tictac::TictacConfig;

#[test]
fn test_loads_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
player_one = "Ada"
player_two = "Grace"
log_file = "game.log"
log_filter = "debug"
"#
    )
    .unwrap();

    let config = TictacConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.player_one().as_deref(), Some("Ada"));
    assert_eq!(config.player_two().as_deref(), Some("Grace"));
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TictacConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_one = [").unwrap();
    let err = TictacConfig::load(Some(file.path())).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_no_path_gives_defaults() {
    assert_eq!(TictacConfig::load(None).unwrap(), TictacConfig::default());
}
