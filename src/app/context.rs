use crate::ports::{SiteStore, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: SiteStore, T: TemplateStore> {
    store: S,
    templates: T,
}

impl<S: SiteStore, T: TemplateStore> AppContext<S, T> {
    /// Create a new application context.
    pub fn new(store: S, templates: T) -> Self {
        Self { store, templates }
    }

    /// Get a reference to the site store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }
}
