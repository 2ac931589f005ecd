use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::{AppError, Era};

/// Parsed `site.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    #[serde(default)]
    pub images: ImagesSection,
    #[serde(default)]
    pub fetch: FetchSection,
    #[serde(default, rename = "repair")]
    pub repairs: Vec<Repair>,
}

/// `[site]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
    pub title: String,
    pub base_url: Url,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

/// `[images]` table. Caps match the WebP pipeline defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImagesSection {
    pub per_era: u32,
    pub full_max_px: u32,
    pub thumb_max_px: u32,
}

/// `[fetch]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchSection {
    pub jitter_min_secs: f64,
    pub jitter_max_secs: f64,
    pub timeout_secs: u64,
}

/// One `[[repair]]` entry: overwrite `position` with `source` within `era`.
#[derive(Debug, Clone, Deserialize)]
pub struct Repair {
    pub era: String,
    pub position: u32,
    pub source: u32,
}

fn default_output_dir() -> String {
    super::DEFAULT_OUTPUT_DIR.to_string()
}

impl Default for ImagesSection {
    fn default() -> Self {
        Self { per_era: 5, full_max_px: 1000, thumb_max_px: 380 }
    }
}

impl Default for FetchSection {
    fn default() -> Self {
        Self { jitter_min_secs: 2.0, jitter_max_secs: 5.0, timeout_secs: 20 }
    }
}

impl SiteConfig {
    /// Load and validate `site.toml` from the given path.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                AppError::SiteConfigMissing
            } else {
                AppError::Io(err)
            }
        })?;
        Self::parse(&content)
    }

    /// Parse and validate site config content.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: SiteConfig =
            toml::from_str(content).map_err(|err| AppError::MalformedSiteConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        let scheme = self.site.base_url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(AppError::InvalidBaseUrl(self.site.base_url.to_string()));
        }

        if self.images.per_era == 0 {
            return Err(AppError::MalformedSiteConfig(
                "images.per_era must be at least 1".to_string(),
            ));
        }

        if self.fetch.jitter_min_secs > self.fetch.jitter_max_secs {
            return Err(AppError::MalformedSiteConfig(format!(
                "fetch.jitter_min_secs ({}) exceeds fetch.jitter_max_secs ({})",
                self.fetch.jitter_min_secs, self.fetch.jitter_max_secs
            )));
        }

        for repair in &self.repairs {
            if Era::from_folder_name(&repair.era).is_none() {
                return Err(AppError::UnknownEraFolder(repair.era.clone()));
            }
            for position in [repair.position, repair.source] {
                if position == 0 {
                    return Err(AppError::InvalidRepairPosition {
                        folder: repair.era.clone(),
                        position,
                    });
                }
            }
        }

        Ok(())
    }

    /// Resolve a repair entry's era folder. Validated at load, so this
    /// only fails if callers bypass `load`/`parse`.
    pub fn repair_era(repair: &Repair) -> Result<Era, AppError> {
        Era::from_folder_name(&repair.era)
            .ok_or_else(|| AppError::UnknownEraFolder(repair.era.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[site]
title = "Skirts Through the Ages"
base_url = "https://skirts.example.org"
"#;

    #[test]
    fn minimal_config_applies_defaults() {
        let config = SiteConfig::parse(MINIMAL).unwrap();
        assert_eq!(config.site.output_dir, "dist");
        assert_eq!(config.images.per_era, 5);
        assert_eq!(config.images.full_max_px, 1000);
        assert_eq!(config.images.thumb_max_px, 380);
        assert_eq!(config.fetch.timeout_secs, 20);
        assert!(config.repairs.is_empty());
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let content = MINIMAL.replace("https://skirts.example.org", "ftp://skirts.example.org");
        assert!(matches!(SiteConfig::parse(&content), Err(AppError::InvalidBaseUrl(_))));
    }

    #[test]
    fn relative_base_url_is_rejected() {
        let content = MINIMAL.replace("https://skirts.example.org", "/skirts");
        assert!(matches!(SiteConfig::parse(&content), Err(AppError::MalformedSiteConfig(_))));
    }

    #[test]
    fn repair_with_unknown_folder_is_rejected() {
        let content = format!(
            "{MINIMAL}\n[[repair]]\nera = \"99_no_such_era\"\nposition = 1\nsource = 2\n"
        );
        match SiteConfig::parse(&content) {
            Err(AppError::UnknownEraFolder(folder)) => assert_eq!(folder, "99_no_such_era"),
            other => panic!("expected UnknownEraFolder, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn repair_with_zero_position_is_rejected() {
        let content = format!(
            "{MINIMAL}\n[[repair]]\nera = \"03_the_middle_ages\"\nposition = 0\nsource = 4\n"
        );
        assert!(matches!(
            SiteConfig::parse(&content),
            Err(AppError::InvalidRepairPosition { .. })
        ));
    }

    #[test]
    fn inverted_jitter_bounds_are_rejected() {
        let content =
            format!("{MINIMAL}\n[fetch]\njitter_min_secs = 6.0\njitter_max_secs = 2.0\n");
        assert!(matches!(SiteConfig::parse(&content), Err(AppError::MalformedSiteConfig(_))));
    }
}
