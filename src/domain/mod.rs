pub mod audit;
pub mod checkpoint;
pub mod era;
pub mod error;
pub mod research;
pub mod site_config;
pub mod site_paths;

pub use audit::{
    AuditRecord, AuditReport, DARK_BRIGHTNESS_MAX, DuplicateGroup, FLAT_STD_DEV_MAX, ImageFlag,
    TINY_BYTES_MAX,
};
pub use checkpoint::FetchCheckpoint;
pub use era::Era;
pub use error::AppError;
pub use research::{EraResearch, ResearchDoc, Section};
pub use site_config::{FetchSection, ImagesSection, Repair, SiteConfig, SiteSection};
pub use site_paths::{
    ASSETS_DIR, CHECKPOINT_FILE, DEFAULT_OUTPUT_DIR, IMAGE_EXTENSIONS, RESEARCH_FILE,
    SITE_CONFIG_FILE, STATUS_LOG_FILE, THUMBS_DIR, assets_dir, era_dir, era_thumbs_dir, image_stem,
    webp_name,
};
