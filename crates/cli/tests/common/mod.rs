//! Shared test utilities for qy-config integration tests.
//!
//! Invariants / Assumptions:
//! - Every command runs with `HOME` pointed at a fresh temporary directory.
//! - `QY_*` variables and `RUST_LOG` from the host never leak into a test.

use assert_cmd::Command;
use tempfile::TempDir;

/// A hermetic `qy-config` invocation bound to a scratch home directory.
pub struct TestEnv {
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temp home"),
        }
    }

    /// Returns a hermetic `qy-config` command.
    pub fn cmd(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("qy-config");

        cmd.env("HOME", self.home.path())
            .env("USERPROFILE", self.home.path())
            .env_remove("RUST_LOG")
            .env_remove("QY_CONFIG_PATH")
            .env_remove("QY_ENDPOINT")
            .env_remove("QY_ACCESS_KEY_ID")
            .env_remove("QY_SECRET_ACCESS_KEY")
            .env_remove("QY_ZONE");

        cmd
    }

    /// Path of the user config file inside the scratch home.
    pub fn user_config_path(&self) -> std::path::PathBuf {
        self.home.path().join(".qingcloud").join("config.yaml")
    }

    /// Write a user config file into the scratch home.
    #[allow(dead_code)]
    pub fn write_user_config(&self, content: &str) {
        let path = self.user_config_path();
        std::fs::create_dir_all(path.parent().expect("parent")).expect("create config dir");
        std::fs::write(path, content).expect("write user config");
    }
}
