/// A file shipped inside the binary and written out during `init`.
#[derive(Debug, Clone)]
pub struct ScaffoldFile {
    /// Path relative to the workspace root.
    pub path: String,
    /// File content as UTF-8 text.
    pub content: String,
}

/// Port for accessing embedded page templates and scaffold content.
pub trait TemplateStore {
    /// All scaffold files, for workspace initialization.
    fn scaffold_files(&self) -> Vec<ScaffoldFile>;

    /// Page template sources by name, for the render environment.
    fn page_templates(&self) -> Vec<(&'static str, &'static str)>;

    /// Static files copied verbatim into the build output (stylesheet etc.).
    fn static_files(&self) -> Vec<ScaffoldFile>;
}
