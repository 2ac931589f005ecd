use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

use crate::app::AppContext;
use crate::domain::{
    AppError, AuditRecord, AuditReport, DARK_BRIGHTNESS_MAX, DuplicateGroup, Era,
    FLAT_STD_DEV_MAX, ImageFlag, TINY_BYTES_MAX, webp_name,
};
use crate::ports::{SiteStore, TemplateStore};
use crate::services::imaging;

/// Options for the audit command.
#[derive(Debug, Default, Clone)]
pub struct AuditOptions {
    /// Restrict to a single era index.
    pub era: Option<u8>,
}

/// Execute the audit command: inspect each era's WebP set and flag
/// watermark-dark, placeholder-tiny, low-detail, and duplicate images.
pub fn execute<S, T>(ctx: &AppContext<S, T>, options: AuditOptions) -> Result<AuditReport, AppError>
where
    S: SiteStore,
    T: TemplateStore,
{
    let config = ctx.store().load_config()?;

    let targets: Vec<Era> = match options.era {
        Some(index) => vec![Era::from_index(index).ok_or(AppError::EraNotFound(index))?],
        None => Era::ALL.to_vec(),
    };

    let mut report = AuditReport::default();
    // size in bytes -> files at that size, for cross-era duplicate detection
    let mut size_map: BTreeMap<u64, Vec<(String, PathBuf)>> = BTreeMap::new();

    for era in targets {
        let era_dir = ctx.store().era_dir(era);

        for n in 1..=config.images.per_era {
            let file = webp_name(n);
            let path = era_dir.join(&file);

            if !path.exists() {
                report.records.push(AuditRecord {
                    folder: era.folder_name().to_string(),
                    file,
                    flags: vec![ImageFlag::Missing],
                    size_bytes: 0,
                    mean_brightness: 0.0,
                    std_dev: 0.0,
                });
                continue;
            }

            let size_bytes = path.metadata()?.len();
            let label = format!("{}/{}", era.folder_name(), file);
            size_map.entry(size_bytes).or_default().push((label, path.clone()));

            let stats = imaging::image_stats(&path)?;
            let mut flags = Vec::new();
            if stats.mean_brightness < DARK_BRIGHTNESS_MAX {
                flags.push(ImageFlag::Dark);
            }
            if size_bytes < TINY_BYTES_MAX {
                flags.push(ImageFlag::Tiny);
            }
            if stats.std_dev < FLAT_STD_DEV_MAX {
                flags.push(ImageFlag::Flat);
            }

            report.records.push(AuditRecord {
                folder: era.folder_name().to_string(),
                file,
                flags,
                size_bytes,
                mean_brightness: stats.mean_brightness,
                std_dev: stats.std_dev,
            });
        }
    }

    report.duplicates = duplicate_groups(size_map)?;
    Ok(report)
}

/// Resolve size collisions into duplicate groups. Matching byte size is
/// only a candidate signal; SHA-256 equality confirms identical content.
fn duplicate_groups(
    size_map: BTreeMap<u64, Vec<(String, PathBuf)>>,
) -> Result<Vec<DuplicateGroup>, AppError> {
    let mut groups = Vec::new();

    for (size_bytes, files) in size_map {
        if files.len() < 2 {
            continue;
        }

        let mut by_digest: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (label, path) in &files {
            let digest = format!("{:x}", Sha256::digest(fs::read(path)?));
            by_digest.entry(digest).or_default().push(label.clone());
        }

        let mut confirmed_any = false;
        for labels in by_digest.into_values() {
            if labels.len() > 1 {
                confirmed_any = true;
                groups.push(DuplicateGroup { size_bytes, confirmed: true, files: labels });
            }
        }

        if !confirmed_any {
            let labels = files.into_iter().map(|(label, _)| label).collect();
            groups.push(DuplicateGroup { size_bytes, confirmed: false, files: labels });
        }
    }

    Ok(groups)
}

/// Print the human-readable audit report.
pub fn print_report(report: &AuditReport) {
    println!("{}", "=".repeat(70));
    println!("IMAGE AUDIT REPORT");
    println!("{}", "=".repeat(70));
    println!();
    println!("Total images checked : {}", report.records.len());
    println!("Issues flagged       : {}", report.flagged_count());
    println!("Clean                : {}", report.clean_count());

    if report.flagged_count() > 0 {
        println!("\n--- FLAGGED IMAGES ---");
        for record in report.flagged() {
            let flags: Vec<String> = record.flags.iter().map(|f| f.to_string()).collect();
            println!("  [{}]  {}/{}", flags.join(" | "), record.folder, record.file);
            println!(
                "           size={}KB  brightness={:.1}/255  std={:.1}",
                record.size_bytes / 1024,
                record.mean_brightness,
                record.std_dev
            );
        }
    }

    if !report.duplicates.is_empty() {
        println!("\n--- DUPLICATES ---");
        for group in &report.duplicates {
            let kind = if group.confirmed { "identical bytes" } else { "identical size only" };
            println!("  {}KB ({}):", group.size_bytes / 1024, kind);
            for file in &group.files {
                println!("    {}", file);
            }
        }
    }
}
