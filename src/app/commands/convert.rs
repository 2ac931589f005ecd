use crate::app::AppContext;
use crate::domain::{AppError, Era, THUMBS_DIR, webp_name};
use crate::ports::{SiteStore, TemplateStore};
use crate::services::imaging;

/// Options for the convert command.
#[derive(Debug, Default, Clone)]
pub struct ConvertOptions {
    /// Restrict to a single era index.
    pub era: Option<u8>,
}

/// Summary of a convert run.
#[derive(Debug, Default, Clone)]
pub struct ConvertReport {
    pub converted: usize,
    pub skipped: usize,
}

/// Execute the convert command: derive WebP full-size and thumbnail
/// renditions from the first `per_era` downloaded originals of each era.
pub fn execute<S, T>(
    ctx: &AppContext<S, T>,
    options: ConvertOptions,
) -> Result<ConvertReport, AppError>
where
    S: SiteStore,
    T: TemplateStore,
{
    let config = ctx.store().load_config()?;

    let targets: Vec<Era> = match options.era {
        Some(index) => vec![Era::from_index(index).ok_or(AppError::EraNotFound(index))?],
        None => Era::ALL.to_vec(),
    };

    let mut report = ConvertReport::default();

    for era in targets {
        let era_dir = ctx.store().era_dir(era);
        if !era_dir.exists() {
            continue;
        }
        println!("[{}]", era.folder_name());

        for n in 1..=config.images.per_era {
            let Some(src) = imaging::find_source(&era_dir, n) else {
                println!("  {}: NOT FOUND — skipping", webp_name(n));
                report.skipped += 1;
                continue;
            };

            let full_dest = era_dir.join(webp_name(n));
            let thumb_dest = era_dir.join(THUMBS_DIR).join(webp_name(n));

            let result = imaging::convert_to_webp(&src, &full_dest, config.images.full_max_px)
                .and_then(|()| {
                    imaging::convert_to_webp(&src, &thumb_dest, config.images.thumb_max_px)
                });

            match result {
                Ok(()) => {
                    let orig_kb = src.metadata()?.len() / 1024;
                    let new_kb = full_dest.metadata()?.len() / 1024;
                    println!(
                        "  {} → {} ({}KB → {}KB)",
                        src.file_name().unwrap_or_default().to_string_lossy(),
                        webp_name(n),
                        orig_kb,
                        new_kb
                    );
                    report.converted += 1;
                }
                Err(err) => {
                    // One bad file should not abort the whole run
                    eprintln!("  ERROR on {}: {}", src.display(), err);
                    report.skipped += 1;
                }
            }
        }
    }

    Ok(report)
}
