use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::FileError;

/// A reference to a label, either by its position in the label set or by
/// its name. Both forms resolve; which one gets *stored* on items is the
/// session's addressing mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelRef {
    Index(usize),
    Name(String),
}

impl fmt::Display for LabelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelRef::Index(index) => write!(f, "{index}"),
            LabelRef::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<usize> for LabelRef {
    fn from(index: usize) -> Self {
        LabelRef::Index(index)
    }
}

impl From<&str> for LabelRef {
    fn from(name: &str) -> Self {
        LabelRef::Name(name.to_string())
    }
}

impl From<String> for LabelRef {
    fn from(name: String) -> Self {
        LabelRef::Name(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    pub labels: Vec<LabelDefinition>,
}

/// The fixed, ordered list of labels selectable during one session.
///
/// Color and shortcut hints ride along for the presentation layer; the
/// core never interprets them.
#[derive(Debug, Clone)]
pub struct LabelSet {
    definitions: Vec<LabelDefinition>,
}

impl LabelSet {
    /// Build a set from bare names, in the given order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let definitions = names
            .into_iter()
            .map(|name| LabelDefinition {
                name: name.into(),
                color: None,
                shortcut: None,
            })
            .collect();
        Self { definitions }
    }

    pub fn from_config(config: LabelConfig) -> Self {
        Self {
            definitions: config.labels,
        }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Label name at `index`.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.definitions.get(index).map(|d| d.name.as_str())
    }

    /// Full definition at `index`, presentation hints included.
    pub fn definition(&self, index: usize) -> Option<&LabelDefinition> {
        self.definitions.get(index)
    }

    /// Position of `name` in the set.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.definitions.iter().position(|d| d.name == name)
    }

    /// Resolve a reference to its canonical position, whichever way it
    /// addresses the label.
    pub fn resolve(&self, label: &LabelRef) -> Option<usize> {
        match label {
            LabelRef::Index(index) if *index < self.definitions.len() => Some(*index),
            LabelRef::Index(_) => None,
            LabelRef::Name(name) => self.position(name),
        }
    }

    /// Iterate label names in set order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|d| d.name.as_str())
    }
}

/// Load a label config from YAML.
///
/// Preferred search order:
///   1) explicit path (if provided)
///   2) ./labels.yaml
///   3) ~/.config/text-annotator/labels.yaml
pub fn load_labels(path: Option<&str>) -> Result<LabelSet, FileError> {
    let mut search_paths: Vec<String> = Vec::new();
    if let Some(p) = path {
        search_paths.push(p.to_string());
    }
    search_paths.push("./labels.yaml".to_string());
    search_paths.push("~/.config/text-annotator/labels.yaml".to_string());

    for candidate in search_paths {
        let expanded = shellexpand::tilde(&candidate);
        let path_obj = Path::new(expanded.as_ref());
        if !path_obj.exists() {
            continue;
        }

        match try_load_label_file(path_obj) {
            Ok(config) => return Ok(LabelSet::from_config(config)),
            Err(e) => log::warn!("Failed to parse label config '{}': {e}", path_obj.display()),
        }
    }

    Err(FileError::MissingLabels)
}

/// Attempt to load a label file; returns an error so the caller can
/// continue searching other candidates.
fn try_load_label_file(path: &Path) -> Result<LabelConfig, FileError> {
    let content = std::fs::read_to_string(path).map_err(|e| FileError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_label_content(&content)
}

/// Parse label YAML content, accepting either a bare list of names or a
/// full LabelConfig.
fn parse_label_content(content: &str) -> Result<LabelConfig, FileError> {
    if let Ok(names) = serde_yaml::from_str::<Vec<String>>(content) {
        let labels = names
            .into_iter()
            .map(|name| LabelDefinition {
                name,
                color: None,
                shortcut: None,
            })
            .collect();
        return Ok(LabelConfig { labels });
    }

    Ok(serde_yaml::from_str::<LabelConfig>(content)?)
}
