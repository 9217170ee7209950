use std::fs;

use focusboard::config::{Config, CONFIG_FILE};

#[test]
fn config_defaults_when_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config::load_from_dir(dir.path());

    assert_eq!(config.pomodoro.tick_ms, 1000);
    assert!(config.notify.bell);
    assert!(!config.notify.desktop);
    assert_eq!(config.notify.command, "notify-send");
}

#[test]
fn config_overrides_from_toml() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let toml = r#"
[pomodoro]
tick_ms = 250

[notify]
bell = false
desktop = true
command = "terminal-notifier"
"#;
    fs::write(dir.path().join(CONFIG_FILE), toml)?;

    let config = Config::load_from_dir(dir.path());

    assert_eq!(config.pomodoro.tick_ms, 250);
    assert!(!config.notify.bell);
    assert!(config.notify.desktop);
    assert_eq!(config.notify.command, "terminal-notifier");
    Ok(())
}

#[test]
fn invalid_config_falls_back_to_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "[pomodoro]\ntick_ms = 0\n")?;

    assert!(Config::load(&path).is_err());
    assert_eq!(Config::load_from_dir(dir.path()).pomodoro.tick_ms, 1000);
    Ok(())
}

#[test]
fn config_round_trips_through_save() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(CONFIG_FILE);
    let mut config = Config::default();
    config.pomodoro.tick_ms = 500;
    config.save(&path)?;

    let loaded = Config::load(&path)?;
    assert_eq!(loaded.pomodoro.tick_ms, 500);
    Ok(())
}
