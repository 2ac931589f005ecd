use include_dir::{Dir, include_dir};

use crate::ports::{ScaffoldFile, TemplateStore};

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scaffold");
static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");
static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/static");

/// Template store backed by assets compiled into the binary.
#[derive(Debug, Default, Clone)]
pub struct EmbeddedAssetStore;

impl EmbeddedAssetStore {
    pub fn new() -> Self {
        Self
    }
}

fn collect_files(dir: &'static Dir, out: &mut Vec<ScaffoldFile>) {
    for file in dir.files() {
        if let Some(content) = file.contents_utf8() {
            out.push(ScaffoldFile {
                path: file.path().to_string_lossy().to_string(),
                content: content.to_string(),
            });
        }
    }
    for subdir in dir.dirs() {
        collect_files(subdir, out);
    }
}

impl TemplateStore for EmbeddedAssetStore {
    fn scaffold_files(&self) -> Vec<ScaffoldFile> {
        let mut files = Vec::new();
        collect_files(&SCAFFOLD_DIR, &mut files);
        files
    }

    fn page_templates(&self) -> Vec<(&'static str, &'static str)> {
        TEMPLATE_DIR
            .files()
            .filter_map(|file| {
                let name = file.path().file_name()?.to_str()?;
                Some((name, file.contents_utf8()?))
            })
            .collect()
    }

    fn static_files(&self) -> Vec<ScaffoldFile> {
        let mut files = Vec::new();
        collect_files(&STATIC_DIR, &mut files);
        files
    }
}
