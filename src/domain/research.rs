use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AppError, Era};

/// One narrative section of an era page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

/// Research entry for a single era: the page content plus the image
/// source URLs the fetch pipeline downloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EraResearch {
    pub era_index: u8,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub image_sources: Vec<String>,
    #[serde(default)]
    pub image_credits: Vec<String>,
}

/// The parsed `research.json` document.
#[derive(Debug, Clone)]
pub struct ResearchDoc {
    entries: Vec<EraResearch>,
}

// Both a bare array and an {"eras": [...]} wrapper are accepted on disk.
#[derive(Deserialize)]
#[serde(untagged)]
enum ResearchFile {
    Bare(Vec<EraResearch>),
    Wrapped { eras: Vec<EraResearch> },
}

impl ResearchDoc {
    /// Load and validate `research.json` from the given path.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                AppError::ResearchMissing
            } else {
                AppError::Io(err)
            }
        })?;
        Self::parse(&content)
    }

    /// Parse and validate research content.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let file: ResearchFile = serde_json::from_str(content)
            .map_err(|err| AppError::MalformedResearch(err.to_string()))?;
        let entries = match file {
            ResearchFile::Bare(entries) => entries,
            ResearchFile::Wrapped { eras } => eras,
        };

        let mut seen = HashSet::new();
        for entry in &entries {
            if Era::from_index(entry.era_index).is_none() {
                return Err(AppError::UnknownEraIndex(entry.era_index));
            }
            if !seen.insert(entry.era_index) {
                return Err(AppError::DuplicateResearchEntry(entry.era_index));
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[EraResearch] {
        &self.entries
    }

    /// The research entry for an era, if one is present.
    pub fn for_era(&self, era: Era) -> Option<&EraResearch> {
        self.entries.iter().find(|entry| entry.era_index == era.index())
    }

    /// Eras with no research entry. Empty when the document is total.
    pub fn missing_eras(&self) -> Vec<Era> {
        Era::ALL.into_iter().filter(|era| self.for_era(*era).is_none()).collect()
    }
}
