use serde::Serialize;

use crate::domain::Era;

/// One row of the era lookup table.
#[derive(Debug, Clone, Serialize)]
pub struct EraRow {
    pub index: u8,
    pub folder: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
}

/// The full era table in index order.
pub fn table() -> Vec<EraRow> {
    Era::ALL
        .into_iter()
        .map(|era| EraRow {
            index: era.index(),
            folder: era.folder_name(),
            slug: era.slug(),
            title: era.title(),
        })
        .collect()
}
