//! Fluent wrapper around assert_cmd::Command.

// Not every test binary uses every helper
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `clerk` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct ClerkCommand {
    args: Vec<String>,
    config: Option<PathBuf>,
}

impl ClerkCommand {
    /// Creates a new command for the `clerk` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config: None,
        }
    }

    /// Sets the `--db` option to choose the database file.
    pub fn db(mut self, path: &Path) -> Self {
        self.args.push("--db".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points `CLERK_CONFIG` at a config file, which need not exist.
    pub fn config(mut self, path: &Path) -> Self {
        self.config = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("clerk").expect("Failed to find clerk binary");
        cmd.args(&self.args).env_remove("RUST_LOG");
        if let Some(config) = &self.config {
            cmd.env("CLERK_CONFIG", config);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for `customer add NAME`.
    pub fn customer_add(self, name: &str) -> Self {
        self.args(["customer", "add", name])
    }

    /// Configures for `note ls CUSTOMER`.
    pub fn note_ls(self, customer: i64) -> Self {
        self.args(["note".to_string(), "ls".to_string(), customer.to_string()])
    }

    /// Configures for `note add CUSTOMER CONTENT`.
    pub fn note_add(self, customer: i64, content: &str) -> Self {
        self.args([
            "note".to_string(),
            "add".to_string(),
            customer.to_string(),
            content.to_string(),
        ])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for ClerkCommand {
    fn default() -> Self {
        Self::new()
    }
}
