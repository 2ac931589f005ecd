//! hemline: build and maintain the Skirts History static site.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::{
    AppContext,
    commands::{audit, build, convert, doctor, eras, fetch, fix, init},
};
use ports::SiteStore;
use services::{EmbeddedAssetStore, FilesystemSiteStore, HttpImageFetcher};

pub use app::commands::audit::AuditOptions;
pub use app::commands::build::{BuildOptions, BuildReport};
pub use app::commands::convert::{ConvertOptions, ConvertReport};
pub use app::commands::doctor::{CheckResult, CheckStatus, DoctorOptions, DoctorOutcome};
pub use app::commands::eras::EraRow;
pub use app::commands::fetch::{FetchOptions, FetchReport};
pub use app::commands::fix::{FixOptions, FixReport};
pub use domain::{AppError, AuditReport, Era};

type Context = AppContext<FilesystemSiteStore, EmbeddedAssetStore>;

fn context() -> Result<Context, AppError> {
    let store = FilesystemSiteStore::current()?;
    Ok(AppContext::new(store, EmbeddedAssetStore::new()))
}

/// A context for an already-initialized workspace.
fn existing_context() -> Result<Context, AppError> {
    let ctx = context()?;
    if !ctx.store().exists() {
        return Err(AppError::WorkspaceNotFound);
    }
    Ok(ctx)
}

/// Scaffold a new site workspace in the current directory.
pub fn init() -> Result<(), AppError> {
    let ctx = context()?;
    init::execute(&ctx)?;
    println!("✅ Initialized site workspace");
    Ok(())
}

/// Print the era lookup table (index, folder, slug, title).
pub fn eras(json: bool) -> Result<Vec<EraRow>, AppError> {
    let rows = eras::table();

    if json {
        let out = serde_json::to_string_pretty(&rows)
            .map_err(|err| AppError::Configuration(err.to_string()))?;
        println!("{}", out);
    } else {
        println!("{:<5} {:<40} {:<37} {}", "IDX", "FOLDER", "SLUG", "TITLE");
        for row in &rows {
            println!("{:<5} {:<40} {:<37} {}", row.index, row.folder, row.slug, row.title);
        }
    }

    Ok(rows)
}

/// Download era imagery from the source URLs in research.json.
pub fn fetch(options: FetchOptions) -> Result<FetchReport, AppError> {
    let ctx = existing_context()?;
    let config = ctx.store().load_config()?;
    let fetcher = HttpImageFetcher::new(&config.fetch)?;

    let report = fetch::execute(&ctx, &fetcher, options)?;
    println!(
        "✅ Fetch complete — downloaded {}, skipped {}, failed {}",
        report.downloaded, report.skipped, report.failed
    );
    Ok(report)
}

/// Convert downloaded originals to WebP full-size and thumbnail renditions.
pub fn convert(options: ConvertOptions) -> Result<ConvertReport, AppError> {
    let ctx = existing_context()?;
    let report = convert::execute(&ctx, options)?;
    println!("✅ Converted {}, skipped {}", report.converted, report.skipped);
    Ok(report)
}

/// Audit the per-era WebP sets for quality and duplicate problems.
pub fn audit(options: AuditOptions, json: bool) -> Result<AuditReport, AppError> {
    let ctx = existing_context()?;
    let report = audit::execute(&ctx, options)?;

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|err| AppError::Configuration(err.to_string()))?;
        println!("{}", out);
    } else {
        audit::print_report(&report);
    }

    Ok(report)
}

/// Apply the curated `[[repair]]` swaps from site.toml.
pub fn fix(options: FixOptions) -> Result<FixReport, AppError> {
    let ctx = existing_context()?;
    let report = fix::execute(&ctx, options)?;
    println!("✅ Applied {}, skipped {}", report.applied, report.skipped);
    Ok(report)
}

/// Render the static site into the output directory.
pub fn build(options: BuildOptions) -> Result<BuildReport, AppError> {
    let ctx = existing_context()?;
    let report = build::execute(&ctx, options)?;
    println!(
        "✅ Built {} pages ({} assets) into {}",
        report.pages,
        report.assets_copied,
        report.output_dir.display()
    );
    Ok(report)
}

/// Validate the site workspace structure and content.
pub fn doctor(options: DoctorOptions) -> Result<DoctorOutcome, AppError> {
    let ctx = existing_context()?;
    let outcome = doctor::execute(&ctx, options)?;
    doctor::print_outcome(&outcome);
    Ok(outcome)
}
