use minijinja::{Environment, Value};

use crate::domain::AppError;
use crate::ports::TemplateStore;

/// Build a render environment with every embedded page template
/// registered under its file name.
pub fn build_environment<T: TemplateStore>(store: &T) -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);

    for (name, source) in store.page_templates() {
        env.add_template(name, source)?;
    }

    Ok(env)
}

/// Render a registered template by name.
pub fn render(env: &Environment<'_>, name: &str, ctx: &Value) -> Result<String, AppError> {
    let template = env.get_template(name)?;
    Ok(template.render(ctx)?)
}
