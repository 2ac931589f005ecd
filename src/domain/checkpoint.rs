use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::AppError;

/// Fetch progress, keyed by era folder name. Each value lists the source
/// URLs already downloaded into that folder, so interrupted runs resume
/// instead of re-downloading.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FetchCheckpoint {
    #[serde(flatten)]
    completed: BTreeMap<String, Vec<String>>,
}

impl FetchCheckpoint {
    /// Load the checkpoint file. An absent file yields an empty checkpoint;
    /// an unreadable or malformed one is an error so the caller can decide
    /// to warn and start fresh.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|err| AppError::config_error(format!("Checkpoint unreadable: {}", err)))
    }

    /// Write the checkpoint atomically (temp file, then rename) so an
    /// interrupt mid-write never leaves a corrupt file on disk.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        let tmp = path.with_extension("tmp");
        let content = serde_json::to_string_pretty(self)
            .map_err(|err| AppError::config_error(format!("Checkpoint unwritable: {}", err)))?;
        fs::write(&tmp, content)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn is_done(&self, era_key: &str, url: &str) -> bool {
        self.completed.get(era_key).is_some_and(|urls| urls.iter().any(|u| u == url))
    }

    pub fn mark_done(&mut self, era_key: &str, url: &str) {
        let urls = self.completed.entry(era_key.to_string()).or_default();
        if !urls.iter().any(|u| u == url) {
            urls.push(url.to_string());
        }
    }

    /// Total completed downloads across all eras.
    pub fn completed_count(&self) -> usize {
        self.completed.values().map(Vec::len).sum()
    }
}
