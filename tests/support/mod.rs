#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

/// Scratch data directory with a fast, silent config
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    pub fn new() -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let home = Self { dir };
        home.write_config("[pomodoro]\ntick_ms = 1\n\n[notify]\nbell = false\n")?;
        Ok(home)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_config(&self, contents: &str) -> std::io::Result<PathBuf> {
        self.write_file("config.toml", contents)
    }

    pub fn write_file(&self, rel_path: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(rel_path);
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn read_json(&self, key: &str) -> Result<Value, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(self.dir.path().join(format!("{key}.json")))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Binary pointed at this data directory
    pub fn cmd(&self) -> Command {
        let mut cmd = focusboard_cmd();
        cmd.arg("--data-dir").arg(self.path());
        cmd
    }

    /// Run with `--json` and return the envelope's `data`
    pub fn json(&self, args: &[&str]) -> Result<Value, Box<dyn std::error::Error>> {
        let output = self
            .cmd()
            .args(args)
            .arg("--json")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let value: Value = serde_json::from_slice(&output)?;
        Ok(value["data"].clone())
    }
}

pub fn focusboard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("focusboard").expect("binary");
    cmd.env_remove("FOCUSBOARD_DATA_DIR");
    cmd.env_remove("RUST_LOG");
    cmd
}
