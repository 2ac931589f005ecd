use crate::app::AppContext;
use crate::domain::{AppError, Era};
use crate::ports::{SiteStore, TemplateStore};

/// Execute the init command.
///
/// Writes the scaffold (site.toml, research.json, deploy glue) and creates
/// the per-era asset folders.
pub fn execute<S, T>(ctx: &AppContext<S, T>) -> Result<(), AppError>
where
    S: SiteStore,
    T: TemplateStore,
{
    if ctx.store().exists() {
        return Err(AppError::WorkspaceExists);
    }

    let scaffold_files = ctx.templates().scaffold_files();
    ctx.store().create_structure(&scaffold_files)?;

    println!("Created:");
    for file in &scaffold_files {
        println!("  {}", file.path);
    }
    println!("  assets/ ({} era folders)", Era::ALL.len());

    Ok(())
}
