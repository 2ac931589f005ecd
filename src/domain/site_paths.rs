use std::path::{Path, PathBuf};

use super::Era;

/// Site configuration file at the workspace root.
pub const SITE_CONFIG_FILE: &str = "site.toml";

/// Per-era content and image sources.
pub const RESEARCH_FILE: &str = "research.json";

/// Root directory for era image folders.
pub const ASSETS_DIR: &str = "assets";

/// Fetch checkpoint, keyed by era folder name.
pub const CHECKPOINT_FILE: &str = "completed_downloads.json";

/// Append-only fetch status log.
pub const STATUS_LOG_FILE: &str = "fetch_status.log";

/// Thumbnail subdirectory inside each era folder.
pub const THUMBS_DIR: &str = "thumbs";

/// Default build output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Extensions recognized as downloaded originals.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// `assets/`
pub fn assets_dir(root: &Path) -> PathBuf {
    root.join(ASSETS_DIR)
}

/// `assets/<folder_name>/`
pub fn era_dir(root: &Path, era: Era) -> PathBuf {
    assets_dir(root).join(era.folder_name())
}

/// `assets/<folder_name>/thumbs/`
pub fn era_thumbs_dir(root: &Path, era: Era) -> PathBuf {
    era_dir(root, era).join(THUMBS_DIR)
}

/// Six-digit, 1-based image stem: position 8 → `000008`.
pub fn image_stem(position: u32) -> String {
    format!("{:06}", position)
}

/// `000008.webp` for position 8.
pub fn webp_name(position: u32) -> String {
    format!("{}.webp", image_stem(position))
}
