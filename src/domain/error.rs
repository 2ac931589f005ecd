use std::io;

use thiserror::Error;

/// Library-wide error type for hemline operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Site workspace already exists at the target location.
    #[error("site.toml already exists in current directory")]
    WorkspaceExists,

    /// No site workspace found in the current directory.
    #[error("No site workspace found. Run 'hemline init' first.")]
    WorkspaceNotFound,

    /// Site config file missing (site.toml).
    #[error("Site config (site.toml) not found. Run 'hemline init' first.")]
    SiteConfigMissing,

    /// Malformed site.toml file.
    #[error("Malformed site.toml: {0}")]
    MalformedSiteConfig(String),

    /// Base URL is not an absolute http(s) URL.
    #[error("Invalid base_url '{0}': must be an absolute http(s) URL")]
    InvalidBaseUrl(String),

    /// Research file missing (research.json).
    #[error("Research file (research.json) not found. Run 'hemline init' first.")]
    ResearchMissing,

    /// Malformed research.json file.
    #[error("Malformed research.json: {0}")]
    MalformedResearch(String),

    /// Research entry references an index with no configured era.
    #[error("research.json entry has era_index {0}, which is not a configured era (1-12)")]
    UnknownEraIndex(u8),

    /// Research file lists the same era twice.
    #[error("research.json lists era_index {0} more than once")]
    DuplicateResearchEntry(u8),

    /// No research entry exists for a configured era.
    #[error("No research entry for era {index} ({title})")]
    ResearchEntryMissing { index: u8, title: &'static str },

    /// Era index lookup miss.
    #[error("No era with index {0} (configured eras are 1-12)")]
    EraNotFound(u8),

    /// Era slug lookup miss.
    #[error("No era with slug '{0}'")]
    UnknownSlug(String),

    /// Era folder-name lookup miss.
    #[error("'{0}' is not a configured era folder")]
    UnknownEraFolder(String),

    /// Repair entry is out of range for the image set.
    #[error("Repair for '{folder}' names position {position}, expected 1 or greater")]
    InvalidRepairPosition { folder: String, position: u32 },

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Image decode or encode failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// HTTP download failed.
    #[error("Download failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Download succeeded at transport level but returned a non-success status.
    #[error("Download of '{url}' returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Every attempted download failed.
    #[error("All {0} attempted downloads failed. See fetch_status.log for details.")]
    AllDownloadsFailed(usize),

    /// Interactive prompt failed or was aborted.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
