//! Shared testing utilities for hemline CLI tests.

use assert_cmd::Command;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated site workspace for CLI exercises.
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
        let work_dir = root.path().join("site");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `hemline` binary in the workspace.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("hemline").expect("Failed to locate hemline binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Run `hemline init` and assert it succeeded.
    pub fn init(&self) {
        self.cli().arg("init").assert().success();
    }

    /// Path to an era's asset folder.
    pub fn era_dir(&self, folder: &str) -> PathBuf {
        self.work_dir.join("assets").join(folder)
    }

    /// Path into the default build output directory.
    pub fn dist(&self, rel: &str) -> PathBuf {
        self.work_dir.join("dist").join(rel)
    }

    /// Overwrite site.toml with a minimal config plus extra TOML appended.
    pub fn write_config(&self, extra: &str) {
        let content = format!(
            "[site]\ntitle = \"Skirts Through the Ages\"\nbase_url = \"https://skirts.example.org\"\n{}",
            extra
        );
        fs::write(self.work_dir.join("site.toml"), content).expect("write site.toml");
    }

    /// Overwrite research.json with entries for every era, attaching the
    /// given image source URLs to the era with `sources_index`.
    pub fn write_research(&self, sources_index: u8, sources: &[String]) {
        let eras: Vec<serde_json::Value> = (1u8..=12)
            .map(|index| {
                let urls: Vec<String> =
                    if index == sources_index { sources.to_vec() } else { Vec::new() };
                json!({
                    "era_index": index,
                    "title": format!("Era {index}"),
                    "summary": format!("Summary of era {index}."),
                    "sections": [
                        {"heading": "Overview", "body": format!("Body for era {index}.")}
                    ],
                    "image_sources": urls,
                })
            })
            .collect();

        let doc = json!({ "eras": eras });
        fs::write(
            self.work_dir.join("research.json"),
            serde_json::to_string_pretty(&doc).expect("serialize research"),
        )
        .expect("write research.json");
    }
}
