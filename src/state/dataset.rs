//! Dataset loading and working-copy construction.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;

use crate::config::ItemOrdering;
use crate::error::FileError;
use crate::state::types::DatasetItem;

/// Load a dataset from a JSON file containing an array of item records.
///
/// An empty array is permitted; the resulting session is a degenerate
/// no-op run.
pub fn load_dataset(path: &Path) -> Result<Vec<DatasetItem>, FileError> {
    let content = fs::read_to_string(path).map_err(|e| FileError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let items: Vec<DatasetItem> = serde_json::from_str(&content)?;

    if items.is_empty() {
        log::warn!("Dataset {} has no items", path.display());
    }

    Ok(items)
}

/// Build the session's working copy: a structural clone of the input,
/// ordered per config.
///
/// Ordering is applied here, once, and never re-applied afterwards; a
/// re-sort after labels attach would desynchronize the cursor from the
/// item the annotator is viewing.
pub fn working_copy(input: &[DatasetItem], ordering: ItemOrdering) -> Vec<DatasetItem> {
    let mut items: Vec<DatasetItem> = input.to_vec();

    match ordering {
        ItemOrdering::AsProvided => {}
        ItemOrdering::ById => items.sort_by_key(|item| item.id),
        ItemOrdering::Shuffled => items.shuffle(&mut rand::thread_rng()),
    }

    warn_on_duplicate_ids(&items);
    items
}

/// Colliding ids are kept as-is, never merged or dropped.
fn warn_on_duplicate_ids(items: &[DatasetItem]) {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id) {
            log::warn!("Duplicate item id {} in dataset", item.id);
        }
    }
}
