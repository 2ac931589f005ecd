use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{AppError, Era, ImagesSection, webp_name};
use crate::ports::{SiteStore, TemplateStore};

/// Options for the doctor command.
#[derive(Debug, Default, Clone)]
pub struct DoctorOptions {
    /// Treat warnings as failures.
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

/// Result of one workspace check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub detail: Option<String>,
}

/// Outcome of a doctor run.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorOutcome {
    pub checks: Vec<CheckResult>,
    pub exit_code: i32,
}

fn pass(name: &str) -> CheckResult {
    CheckResult { name: name.to_string(), status: CheckStatus::Pass, detail: None }
}

fn warn(name: &str, detail: String) -> CheckResult {
    CheckResult { name: name.to_string(), status: CheckStatus::Warn, detail: Some(detail) }
}

fn fail(name: &str, detail: String) -> CheckResult {
    CheckResult { name: name.to_string(), status: CheckStatus::Fail, detail: Some(detail) }
}

/// Execute the doctor command: validate config, research totality, era
/// folders, and WebP completeness.
pub fn execute<S, T>(ctx: &AppContext<S, T>, options: DoctorOptions) -> Result<DoctorOutcome, AppError>
where
    S: SiteStore,
    T: TemplateStore,
{
    let mut checks = Vec::new();

    // Config parses and validates (base URL scheme included)
    let images = match ctx.store().load_config() {
        Ok(config) => {
            checks.push(pass("site.toml"));
            config.images
        }
        Err(err) => {
            checks.push(fail("site.toml", err.to_string()));
            ImagesSection::default()
        }
    };

    // Research parses; entry set must match the era table exactly
    match ctx.store().load_research() {
        Ok(research) => {
            checks.push(pass("research.json"));
            let missing = research.missing_eras();
            if missing.is_empty() {
                checks.push(pass("research covers every era"));
            } else {
                let names: Vec<&str> = missing.iter().map(|era| era.title()).collect();
                checks.push(fail(
                    "research covers every era",
                    format!("missing entries for: {}", names.join(", ")),
                ));
            }
        }
        Err(err) => {
            checks.push(fail("research.json", err.to_string()));
        }
    }

    // Era asset folders
    let missing_folders: Vec<&str> = Era::ALL
        .iter()
        .filter(|era| !ctx.store().era_dir(**era).exists())
        .map(|era| era.folder_name())
        .collect();
    if missing_folders.is_empty() {
        checks.push(pass("era asset folders"));
    } else {
        checks.push(fail("era asset folders", format!("missing: {}", missing_folders.join(", "))));
    }

    // WebP completeness is advisory: fetch/convert may simply not have run yet
    let mut incomplete = Vec::new();
    for era in Era::ALL {
        let era_dir = ctx.store().era_dir(era);
        let present = (1..=images.per_era)
            .filter(|n| era_dir.join(webp_name(*n)).exists())
            .count() as u32;
        if present < images.per_era {
            incomplete.push(format!("{} ({}/{})", era.folder_name(), present, images.per_era));
        }
    }
    if incomplete.is_empty() {
        checks.push(pass("webp sets complete"));
    } else {
        checks.push(warn("webp sets complete", incomplete.join(", ")));
    }

    let failed = checks.iter().any(|check| check.status == CheckStatus::Fail);
    let warned = checks.iter().any(|check| check.status == CheckStatus::Warn);
    let exit_code = if failed || (options.strict && warned) { 1 } else { 0 };

    Ok(DoctorOutcome { checks, exit_code })
}

/// Print the check list in the `✅`/`⚠️`/`❌` style.
pub fn print_outcome(outcome: &DoctorOutcome) {
    for check in &outcome.checks {
        let icon = match check.status {
            CheckStatus::Pass => "✅",
            CheckStatus::Warn => "⚠️ ",
            CheckStatus::Fail => "❌",
        };
        match &check.detail {
            Some(detail) => println!("{} {}: {}", icon, check.name, detail),
            None => println!("{} {}", icon, check.name),
        }
    }
}
