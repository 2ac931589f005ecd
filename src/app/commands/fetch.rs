use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use rand::Rng;
use url::Url;

use crate::app::AppContext;
use crate::domain::{AppError, Era, FetchCheckpoint, IMAGE_EXTENSIONS, SiteConfig, image_stem};
use crate::ports::{ImageFetcher, SiteStore, TemplateStore};
use crate::services::{StatusLog, imaging};

/// Options for the fetch command.
#[derive(Debug, Default, Clone)]
pub struct FetchOptions {
    /// Restrict to a single era index.
    pub era: Option<u8>,
    /// Ignore the checkpoint and re-download everything.
    pub fresh: bool,
    /// Skip the inter-download jitter (used by tests).
    pub no_jitter: bool,
}

/// Summary of a fetch run.
#[derive(Debug, Default, Clone)]
pub struct FetchReport {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Execute the fetch command: download era imagery from the source URLs in
/// research.json, resuming from the checkpoint file.
pub fn execute<S, T, F>(
    ctx: &AppContext<S, T>,
    fetcher: &F,
    options: FetchOptions,
) -> Result<FetchReport, AppError>
where
    S: SiteStore,
    T: TemplateStore,
    F: ImageFetcher,
{
    let config = ctx.store().load_config()?;
    let research = ctx.store().load_research()?;
    let log = StatusLog::new(ctx.store().status_log_path());

    let checkpoint_path = ctx.store().checkpoint_path();
    let mut checkpoint = load_checkpoint(&checkpoint_path, options.fresh, &log)?;

    let targets: Vec<Era> = match options.era {
        Some(index) => vec![Era::from_index(index).ok_or(AppError::EraNotFound(index))?],
        None => Era::ALL.to_vec(),
    };

    log.info(&format!(
        "Fetch starting. Eras: {}, checkpoint entries: {}",
        targets.len(),
        checkpoint.completed_count()
    ))?;

    let mut report = FetchReport::default();

    for era in targets {
        let Some(entry) = research.for_era(era) else {
            log.warning(&format!("No research entry for {} — skipping era", era.folder_name()))?;
            continue;
        };
        if entry.image_sources.is_empty() {
            continue;
        }

        let era_key = era.folder_name();
        let era_dir = ctx.store().era_dir(era);
        fs::create_dir_all(&era_dir)?;
        log.info(&format!("=== Era: {} ({} sources) ===", entry.title, entry.image_sources.len()))?;

        let total = entry.image_sources.len();
        for (i, source) in entry.image_sources.iter().enumerate() {
            if checkpoint.is_done(era_key, source) {
                log.info(&format!("SKIP (checkpoint) {}", source))?;
                report.skipped += 1;
                continue;
            }

            // Continue numbering after whatever is already on disk
            let position = imaging::count_images(&era_dir)? as u32 + 1;
            let dest = era_dir.join(format!("{}.{}", image_stem(position), extension_for(source)));

            match fetcher.fetch(source) {
                Ok(bytes) => {
                    fs::write(&dest, bytes)?;
                    checkpoint.mark_done(era_key, source);
                    checkpoint.save(&checkpoint_path)?;
                    log.info(&format!("OK {} -> {}", source, dest.display()))?;
                    println!("  ✅ {} → {}", entry.title, dest.file_name().unwrap_or_default().to_string_lossy());
                    report.downloaded += 1;
                }
                Err(err) => {
                    // Left unmarked so the next run retries it
                    log.error(&format!("FAILED {} ({})", source, err))?;
                    eprintln!("  ❌ {} ({})", source, err);
                    report.failed += 1;
                }
            }

            if !options.no_jitter && i + 1 < total {
                jitter_sleep(&config);
            }
        }
    }

    log.info(&format!(
        "Fetch complete. Downloaded: {}, skipped: {}, failed: {}",
        report.downloaded, report.skipped, report.failed
    ))?;

    if report.downloaded == 0 && report.skipped == 0 && report.failed > 0 {
        return Err(AppError::AllDownloadsFailed(report.failed));
    }

    Ok(report)
}

fn load_checkpoint(
    path: &Path,
    fresh: bool,
    log: &StatusLog,
) -> Result<FetchCheckpoint, AppError> {
    if fresh {
        return Ok(FetchCheckpoint::default());
    }
    match FetchCheckpoint::load(path) {
        Ok(checkpoint) => Ok(checkpoint),
        Err(err) => {
            println!("⚠️  Checkpoint unreadable — starting fresh");
            log.warning(&format!("Checkpoint unreadable ({}) — starting fresh", err))?;
            Ok(FetchCheckpoint::default())
        }
    }
}

/// File extension for a source URL, falling back to `jpg` when the URL
/// path carries none we recognize.
fn extension_for(source: &str) -> String {
    Url::parse(source)
        .ok()
        .and_then(|url| {
            let segment = url.path_segments()?.next_back()?.to_string();
            let ext = Path::new(&segment).extension()?.to_str()?.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
        })
        .unwrap_or_else(|| "jpg".to_string())
}

fn jitter_sleep(config: &SiteConfig) {
    let min = config.fetch.jitter_min_secs;
    let max = config.fetch.jitter_max_secs;
    let secs = if max > min { rand::thread_rng().gen_range(min..=max) } else { min };
    thread::sleep(Duration::from_secs_f64(secs));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_comes_from_url_path() {
        assert_eq!(extension_for("https://example.org/dir/skirt.PNG"), "png");
        assert_eq!(extension_for("https://example.org/dir/skirt.webp?v=2"), "webp");
    }

    #[test]
    fn unknown_extension_falls_back_to_jpg() {
        assert_eq!(extension_for("https://example.org/image"), "jpg");
        assert_eq!(extension_for("https://example.org/file.svg"), "jpg");
        assert_eq!(extension_for("not a url"), "jpg");
    }
}
