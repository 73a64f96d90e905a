use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::FileError;

/// Item ordering applied once when the working copy is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemOrdering {
    /// Keep the order the host supplied.
    AsProvided,
    /// Sort by item id before copying. Applied at construction only; the
    /// order never changes again once labels can be attached.
    ById,
    /// Randomize once at construction.
    Shuffled,
}

/// How labels are stored on items and in the export: by position in the
/// label set or by name. One session uses one mode throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelAddressing {
    ByIndex,
    ByName,
}

/// The label-selection interaction the session models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionModel {
    /// Multi-button UI: reassigning the label an item already carries
    /// clears it.
    Toggle,
    /// Single-select UI: assignment always sets; clearing goes through the
    /// explicit clear operation.
    Exclusive,
}

/// When a session is considered ready to finalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalizePolicy {
    /// Finalize only on explicit request, whatever the labeling state.
    Manual,
    /// Report the session as due for finalization once the cursor sits on
    /// the last item and that item has been interacted with.
    AutoOnLastItem,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub ordering: ItemOrdering,
    #[serde(default)]
    pub addressing: LabelAddressing,
    #[serde(default)]
    pub selection: SelectionModel,
    #[serde(default)]
    pub finalize: FinalizePolicy,
}

impl Default for ItemOrdering {
    fn default() -> Self {
        ItemOrdering::AsProvided
    }
}

impl Default for LabelAddressing {
    fn default() -> Self {
        LabelAddressing::ByIndex
    }
}

impl Default for SelectionModel {
    fn default() -> Self {
        SelectionModel::Toggle
    }
}

impl Default for FinalizePolicy {
    fn default() -> Self {
        FinalizePolicy::Manual
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ordering: ItemOrdering::default(),
            addressing: LabelAddressing::default(),
            selection: SelectionModel::default(),
            finalize: FinalizePolicy::default(),
        }
    }
}

/// Get the path to the config file
pub fn config_path() -> PathBuf {
    let config_dir = directories::ProjectDirs::from("", "", "text-annotator")
        .expect("Failed to determine config directory")
        .config_dir()
        .to_path_buf();
    config_dir.join("config.toml")
}

/// Load configuration from file, or return default if file doesn't exist
pub fn load_config() -> SessionConfig {
    let path = config_path();
    if path.exists() {
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Failed to parse config file: {e}. Using defaults.");
                    SessionConfig::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to read config file: {e}. Using defaults.");
                SessionConfig::default()
            }
        }
    } else {
        SessionConfig::default()
    }
}

/// Save configuration to file
pub fn save_config(config: &SessionConfig) -> Result<(), FileError> {
    let path = config_path();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| FileError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let toml = toml::to_string_pretty(config)?;

    std::fs::write(&path, toml).map_err(|e| FileError::Io {
        path: path.clone(),
        source: e,
    })?;

    Ok(())
}
