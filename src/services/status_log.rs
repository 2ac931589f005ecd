use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

use crate::domain::AppError;

/// Append-only, timestamped status log for long-running fetch runs.
#[derive(Debug, Clone)]
pub struct StatusLog {
    path: PathBuf,
}

impl StatusLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn record(&self, level: &str, message: &str) -> Result<(), AppError> {
        let line = format!(
            "{} [{:<7}] {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            level,
            message
        );
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    pub fn info(&self, message: &str) -> Result<(), AppError> {
        self.record("INFO", message)
    }

    pub fn warning(&self, message: &str) -> Result<(), AppError> {
        self.record("WARNING", message)
    }

    pub fn error(&self, message: &str) -> Result<(), AppError> {
        self.record("ERROR", message)
    }
}
