//! Common test utilities.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// An isolated browser profile: its own state, config and working
/// directories, removed when dropped.
pub struct Site {
    dir: TempDir,
}

impl Site {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("config")).expect("Failed to create config dir");
        std::fs::create_dir_all(dir.path().join("work")).expect("Failed to create work dir");
        Self { dir }
    }

    pub fn state_dir(&self) -> PathBuf {
        self.dir.path().join("state")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a user config file.
    pub fn write_config(&self, yaml: &str) {
        let config_dir = self.dir.path().join("config").join("raniclean");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        std::fs::write(config_dir.join("site.yaml"), yaml).expect("Failed to write config");
    }

    /// A `raniclean` command confined to this profile, with English output.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("raniclean"));
        cmd.current_dir(self.dir.path().join("work"))
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("RANICLEAN_STATE_DIR", self.state_dir())
            .env("RANICLEAN_LOCALE", "en")
            .env_remove("RANICLEAN_EMAILJS_ENDPOINT")
            .env_remove("RANICLEAN_EMAILJS_SERVICE_ID")
            .env_remove("RANICLEAN_EMAILJS_TEMPLATE_ID")
            .env_remove("RANICLEAN_EMAILJS_PUBLIC_KEY")
            .env_remove("RUST_LOG");
        cmd
    }
}
