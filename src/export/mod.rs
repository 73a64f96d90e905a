// Export of finished annotation runs.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::FileError;
use crate::state::DatasetItem;

/// Export format types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One pretty-printed document with an info block.
    Json,
    /// One item record per line, for downstream ingestion.
    JsonLines,
}

impl ExportFormat {
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::JsonLines => "JSON Lines",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::JsonLines => "jsonl",
        }
    }
}

/// The structure handed back to the host when a session finalizes:
/// annotator identity plus the full item sequence in its current order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPayload {
    pub annotator: String,
    pub labelled_dataset: Vec<DatasetItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportInfo {
    pub version: String,
    pub description: String,
    pub date_created: String,
}

/// File-oriented wrapper around the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub info: ExportInfo,
    pub annotator: String,
    pub labelled_dataset: Vec<DatasetItem>,
}

impl ExportDocument {
    pub fn new(payload: ExportPayload) -> Self {
        let now = chrono::Local::now();
        ExportDocument {
            info: ExportInfo {
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: "Labeled dataset exported from text-annotator".to_string(),
                date_created: now.format("%Y-%m-%d").to_string(),
            },
            annotator: payload.annotator,
            labelled_dataset: payload.labelled_dataset,
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), FileError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| FileError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }
}

/// Export counts reported back after a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportStats {
    pub items_exported: usize,
    pub labels_exported: usize,
}

/// Write `payload` to `path` in the requested format.
pub fn save_payload(
    payload: &ExportPayload,
    format: ExportFormat,
    path: &Path,
) -> Result<ExportStats, FileError> {
    match format {
        ExportFormat::Json => ExportDocument::new(payload.clone()).save(path)?,
        ExportFormat::JsonLines => save_json_lines(payload, path)?,
    }

    Ok(ExportStats {
        items_exported: payload.labelled_dataset.len(),
        labels_exported: payload
            .labelled_dataset
            .iter()
            .filter(|item| item.is_labeled())
            .count(),
    })
}

fn save_json_lines(payload: &ExportPayload, path: &Path) -> Result<(), FileError> {
    let mut lines = Vec::with_capacity(payload.labelled_dataset.len());
    for item in &payload.labelled_dataset {
        lines.push(serde_json::to_string(item)?);
    }
    fs::write(path, lines.join("\n")).map_err(|e| FileError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
