//! Isolated test environment with temp directory.

// Not every test binary uses every helper
#![allow(dead_code)]

use super::ClerkCommand;
use clerk::store::SqliteStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary database and config file.
///
/// Creates a temp directory that is automatically cleaned up on drop. The
/// config file does not exist until [`TestEnv::write_config`] is called, so
/// commands start from built-in defaults.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the temp directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the SQLite database.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("data").join("clerk.db")
    }

    /// Returns the path of the config file.
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Writes the config file.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.config_path(), contents).expect("Failed to write config");
    }

    /// Opens the database directly, for seeding or inspecting state.
    pub fn store(&self) -> SqliteStore {
        SqliteStore::open(&self.db_path()).expect("Failed to open store")
    }

    /// Creates a ClerkCommand configured for this test environment.
    pub fn cmd(&self) -> ClerkCommand {
        ClerkCommand::new()
            .config(&self.config_path())
            .db(&self.db_path())
    }

    /// Creates a customer through the CLI and returns its id.
    pub fn add_customer(&self, name: &str) -> i64 {
        let output: serde_json::Value = self.cmd().customer_add(name).format_json().output_json();
        output["data"]["id"]
            .as_i64()
            .expect("customer id in JSON output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
