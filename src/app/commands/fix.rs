use std::fs;

use dialoguer::Confirm;

use crate::app::AppContext;
use crate::domain::{AppError, SiteConfig, THUMBS_DIR, webp_name};
use crate::ports::{SiteStore, TemplateStore};
use crate::services::imaging;

/// Options for the fix command.
#[derive(Debug, Default, Clone)]
pub struct FixOptions {
    /// Apply without the interactive confirmation.
    pub yes: bool,
}

/// Summary of a fix run.
#[derive(Debug, Default, Clone)]
pub struct FixReport {
    pub applied: usize,
    pub skipped: usize,
}

/// Execute the fix command: overwrite known-bad WebP positions with better
/// ones from the same era, as declared by `[[repair]]` in site.toml, and
/// regenerate the affected thumbnails.
pub fn execute<S, T>(ctx: &AppContext<S, T>, options: FixOptions) -> Result<FixReport, AppError>
where
    S: SiteStore,
    T: TemplateStore,
{
    let config = ctx.store().load_config()?;

    if config.repairs.is_empty() {
        println!("No [[repair]] entries in site.toml — nothing to do");
        return Ok(FixReport::default());
    }

    println!("Planned repairs:");
    for repair in &config.repairs {
        println!(
            "  {}/{} ← {}",
            repair.era,
            webp_name(repair.position),
            webp_name(repair.source)
        );
    }

    if !options.yes {
        let proceed = Confirm::new()
            .with_prompt("Overwrite these positions?")
            .default(false)
            .interact()?;
        if !proceed {
            println!("Aborted — no files changed");
            return Ok(FixReport { applied: 0, skipped: config.repairs.len() });
        }
    }

    let mut report = FixReport::default();

    for repair in &config.repairs {
        let era = SiteConfig::repair_era(repair)?;
        let era_dir = ctx.store().era_dir(era);

        let src_full = era_dir.join(webp_name(repair.source));
        let dest_full = era_dir.join(webp_name(repair.position));
        let dest_thumb = era_dir.join(THUMBS_DIR).join(webp_name(repair.position));

        if !src_full.exists() {
            println!("  SKIP  {}: source {} missing", repair.era, webp_name(repair.source));
            report.skipped += 1;
            continue;
        }

        fs::copy(&src_full, &dest_full)?;

        // Thumbnail is re-derived from the promoted full image
        imaging::convert_to_webp(&dest_full, &dest_thumb, config.images.thumb_max_px)?;

        let kb = dest_full.metadata()?.len() / 1024;
        println!(
            "  FIXED  {}/{} ← {} ({}KB)",
            repair.era,
            webp_name(repair.position),
            webp_name(repair.source),
            kb
        );
        report.applied += 1;
    }

    Ok(report)
}
