use std::path::{Path, PathBuf};

use crate::domain::{
    AppError, CHECKPOINT_FILE, Era, RESEARCH_FILE, ResearchDoc, SITE_CONFIG_FILE, STATUS_LOG_FILE,
    SiteConfig, assets_dir, era_dir, era_thumbs_dir,
};

use super::ScaffoldFile;

/// Port over the site workspace on disk.
pub trait SiteStore {
    /// Workspace root directory.
    fn root(&self) -> &Path;

    /// Whether a workspace exists here (site.toml is the marker).
    fn exists(&self) -> bool {
        self.config_path().exists()
    }

    /// Write the scaffold files and create the era asset folders.
    fn create_structure(&self, scaffold_files: &[ScaffoldFile]) -> Result<(), AppError>;

    fn config_path(&self) -> PathBuf {
        self.root().join(SITE_CONFIG_FILE)
    }

    fn research_path(&self) -> PathBuf {
        self.root().join(RESEARCH_FILE)
    }

    fn checkpoint_path(&self) -> PathBuf {
        self.root().join(CHECKPOINT_FILE)
    }

    fn status_log_path(&self) -> PathBuf {
        self.root().join(STATUS_LOG_FILE)
    }

    fn assets_dir(&self) -> PathBuf {
        assets_dir(self.root())
    }

    fn era_dir(&self, era: Era) -> PathBuf {
        era_dir(self.root(), era)
    }

    fn era_thumbs_dir(&self, era: Era) -> PathBuf {
        era_thumbs_dir(self.root(), era)
    }

    fn load_config(&self) -> Result<SiteConfig, AppError> {
        SiteConfig::load(&self.config_path())
    }

    fn load_research(&self) -> Result<ResearchDoc, AppError> {
        ResearchDoc::load(&self.research_path())
    }
}
