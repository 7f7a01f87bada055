//! Test environment builder for isolated SiteLedger testing.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a SiteLedger CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as a single JSON document (for `--json` commands)
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|err| {
            panic!(
                "expected JSON output, got error {err}\nstdout:\n{}\nstderr:\n{}",
                self.stdout, self.stderr
            )
        })
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    data_dir: TempDir,
    home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        TestEnv {
            data_dir: TempDir::new().expect("create temp data dir"),
            home_dir: TempDir::new().expect("create temp home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_siteledger")),
        }
    }

    /// Path inside the ledger data directory
    pub fn data_path(&self, relative: &str) -> PathBuf {
        self.data_dir.path().join(relative)
    }

    /// Run the CLI against this environment's data directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.arg("--data-dir")
            .arg(self.data_dir.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("XDG_DATA_HOME", self.home_dir.path().join(".local/share"))
            .env("SITELEDGER_NO_COLOR", "1")
            .env_remove("RUST_LOG");

        let output = cmd.output().expect("failed to execute siteledger");
        self.output_to_result(output)
    }

    /// Create a project with sensible defaults, returning its id.
    pub fn create_project(&self, name: &str, budget: &str) -> String {
        let result = self.run(&[
            "--json",
            "project",
            "add",
            "--name",
            name,
            "--description",
            "Test project",
            "--client",
            "Test Client",
            "--start",
            "2026-01-15",
            "--end",
            "2026-09-30",
            "--budget",
            budget,
        ]);
        assert!(
            result.success,
            "project add should succeed.\nstdout: {}\nstderr: {}",
            result.stdout, result.stderr
        );
        result.json()["project"]["id"]
            .as_str()
            .expect("created project has an id")
            .to_string()
    }

    fn output_to_result(&self, output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
