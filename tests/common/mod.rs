//! Shared testing utilities for siteconf CLI tests.

use assert_cmd::Command;
use siteconf::BuildEnv;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled `siteconf` binary.
    ///
    /// The build-time contract variables and `RUST_LOG` are scrubbed from the
    /// child environment so the surrounding shell cannot leak into a test;
    /// each test opts back in with `.env()`.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("siteconf").expect("Failed to locate siteconf binary");
        cmd.current_dir(&self.work_dir);
        for spec in BuildEnv::SPECS {
            cmd.env_remove(spec.name);
        }
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Write `redirects.toml` into the working directory.
    pub fn write_redirects(&self, contents: &str) -> PathBuf {
        let path = self.work_dir.join("redirects.toml");
        fs::write(&path, contents).expect("Failed to write redirects file");
        path
    }

    /// Write a `.env` file into the working directory.
    pub fn write_dotenv(&self, contents: &str) {
        fs::write(self.work_dir.join(".env"), contents).expect("Failed to write .env file");
    }
}
