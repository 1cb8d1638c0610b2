//! Common test utilities for tailwatch CLI tests.
//!
//! This module provides:
//! - `TestResult`: captured outcome of a finished run
//! - `Follower`: a running `tailwatch` process with piped output
//! - Helpers to build log files in a temp directory

#![allow(dead_code)]

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

/// Result of running tailwatch to completion
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Command for the built binary with settings isolated from the host.
pub fn tailwatch(config_home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tailwatch"));
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("TAILWATCH_LINES")
        .env_remove("TAILWATCH_RETRY_MS")
        .env_remove("TAILWATCH_POLL_MS");
    cmd
}

/// Run tailwatch with `args` and wait for it to exit.
pub fn run(config_home: &Path, args: &[&str]) -> TestResult {
    let output = tailwatch(config_home)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute tailwatch");

    TestResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// A tailwatch process that keeps following until stopped.
pub struct Follower {
    child: Child,
}

impl Follower {
    pub fn spawn(config_home: &Path, args: &[&str]) -> Self {
        let child = tailwatch(config_home)
            .args(args)
            .env("TAILWATCH_RETRY_MS", "50")
            .env("TAILWATCH_POLL_MS", "50")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start tailwatch");
        Self { child }
    }

    /// Kill the process and return everything it printed.
    pub fn stop(mut self) -> String {
        let _ = self.child.kill();
        let _ = self.child.wait();
        let mut stdout = String::new();
        if let Some(mut out) = self.child.stdout.take() {
            let _ = out.read_to_string(&mut stdout);
        }
        stdout
    }
}

impl Drop for Follower {
    fn drop(&mut self) {
        let _ = self.child.kill();
    }
}

/// Write `content` to `name` inside `dir` and return the full path.
pub fn log_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
