use std::fmt;

use serde::Serialize;

/// Mean brightness below this flags an image as `DARK` (likely a black
/// watermark background).
pub const DARK_BRIGHTNESS_MAX: f64 = 60.0;

/// Byte size below this flags an image as `TINY` (placeholder or failed
/// download).
pub const TINY_BYTES_MAX: u64 = 5_000;

/// Pixel standard deviation below this flags an image as `FLAT` (very
/// low detail or solid colour).
pub const FLAT_STD_DEV_MAX: f64 = 15.0;

/// A quality flag raised against one image position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImageFlag {
    Missing,
    Dark,
    Tiny,
    Flat,
}

impl fmt::Display for ImageFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ImageFlag::Missing => "MISSING",
            ImageFlag::Dark => "DARK",
            ImageFlag::Tiny => "TINY",
            ImageFlag::Flat => "FLAT",
        };
        write!(f, "{}", label)
    }
}

/// Audit result for a single expected image position.
#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
    /// Era folder name, e.g. `06_victorian_era_crinolines`.
    pub folder: String,
    /// File name within the folder, e.g. `000002.webp`.
    pub file: String,
    pub flags: Vec<ImageFlag>,
    pub size_bytes: u64,
    pub mean_brightness: f64,
    pub std_dev: f64,
}

impl AuditRecord {
    pub fn is_flagged(&self) -> bool {
        !self.flags.is_empty()
    }
}

/// Files sharing an identical byte size across eras. `confirmed` means the
/// SHA-256 digests also match, i.e. the bytes are identical.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateGroup {
    pub size_bytes: u64,
    pub confirmed: bool,
    /// `folder/file` entries, sorted.
    pub files: Vec<String>,
}

/// Full audit output: one record per expected position plus cross-era
/// duplicate groups.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    pub records: Vec<AuditRecord>,
    pub duplicates: Vec<DuplicateGroup>,
}

impl AuditReport {
    pub fn flagged(&self) -> impl Iterator<Item = &AuditRecord> {
        self.records.iter().filter(|record| record.is_flagged())
    }

    pub fn flagged_count(&self) -> usize {
        self.flagged().count()
    }

    pub fn clean_count(&self) -> usize {
        self.records.len() - self.flagged_count()
    }

    pub fn is_clean(&self) -> bool {
        self.flagged_count() == 0 && self.duplicates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(flags: Vec<ImageFlag>) -> AuditRecord {
        AuditRecord {
            folder: "08_1920s_flapper".to_string(),
            file: "000001.webp".to_string(),
            flags,
            size_bytes: 42_000,
            mean_brightness: 120.0,
            std_dev: 40.0,
        }
    }

    #[test]
    fn counts_split_flagged_and_clean() {
        let report = AuditReport {
            records: vec![record(vec![]), record(vec![ImageFlag::Dark])],
            duplicates: vec![],
        };
        assert_eq!(report.flagged_count(), 1);
        assert_eq!(report.clean_count(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn flags_serialize_uppercase() {
        let json = serde_json::to_string(&ImageFlag::Tiny).unwrap();
        assert_eq!(json, "\"TINY\"");
    }
}
