use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Era};
use crate::ports::{ScaffoldFile, SiteStore};

/// Filesystem-based site store implementation.
#[derive(Debug, Clone)]
pub struct FilesystemSiteStore {
    root: PathBuf,
}

impl FilesystemSiteStore {
    /// Create a site store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a site store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }
}

impl SiteStore for FilesystemSiteStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn create_structure(&self, scaffold_files: &[ScaffoldFile]) -> Result<(), AppError> {
        for entry in scaffold_files {
            let path = self.root.join(&entry.path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, &entry.content)?;
        }

        // One asset folder per era
        for era in Era::ALL {
            fs::create_dir_all(self.era_dir(era))?;
        }

        Ok(())
    }
}
