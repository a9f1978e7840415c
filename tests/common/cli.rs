//! Runs the `benchstats` binary against a temporary data root.

use assert_cmd::Command;
use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

/// A temporary `--root` holding fixture logs and config files.
pub struct DataRoot {
    dir: TempDir,
}

impl DataRoot {
    pub fn new() -> Self {
        super::init_test_logging();
        let dir = TempDir::new().expect("temp dir");
        debug!(root = %dir.path().display(), "Created data root");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file below the root, creating parent directories.
    pub fn write(&self, relative: impl AsRef<Path>, contents: &str) -> PathBuf {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("parent dir");
        }
        fs::write(&path, contents).expect("write fixture");
        path
    }

    /// `benchstats --root <root>`, started inside the root with a clean
    /// logging environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("benchstats"));
        cmd.current_dir(self.path())
            .arg("--root")
            .arg(self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run<I, S>(&self, args: I) -> Outcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("run benchstats");
        let outcome = Outcome {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        };
        debug!(code = ?outcome.code, "benchstats exited");
        outcome
    }
}

/// Captured output and exit code of one invocation.
#[derive(Debug)]
pub struct Outcome {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

impl Outcome {
    /// Panics with stderr unless the command exited 0.
    #[track_caller]
    pub fn success(self) -> Self {
        assert_eq!(self.code, Some(0), "benchstats failed: {}", self.stderr);
        self
    }

    /// Stdout as one JSON document.
    #[track_caller]
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {}", self.stdout))
    }

    /// The `error` object of the structured error printed last on stderr.
    ///
    /// Log lines may precede it; the document itself starts with a bare `{`.
    #[track_caller]
    pub fn error(&self) -> Value {
        let start = if self.stderr.starts_with('{') {
            0
        } else {
            self.stderr
                .rfind("\n{")
                .map(|idx| idx + 1)
                .unwrap_or_else(|| panic!("no structured error on stderr: {}", self.stderr))
        };
        let doc: Value =
            serde_json::from_str(self.stderr[start..].trim_end()).expect("structured error json");
        doc["error"].clone()
    }

    /// Asserts the exit code and the structured error code.
    #[track_caller]
    pub fn failure(&self, exit_code: i32, code: &str) -> Value {
        assert_eq!(self.code, Some(exit_code), "stderr: {}", self.stderr);
        let error = self.error();
        assert_eq!(error["code"], code, "stderr: {}", self.stderr);
        error
    }
}
