//! Item and session-state types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::labels::LabelRef;

/// One unit of text to be labeled.
///
/// `id` is the item's stable identity, independent of ordering. Extra
/// record fields land in `metadata` and pass through the session verbatim;
/// the core never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetItem {
    pub id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelRef>,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl DatasetItem {
    /// A fresh, unlabeled item with no metadata.
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            label: None,
            metadata: Map::new(),
        }
    }

    /// Whether a label is currently assigned.
    pub fn is_labeled(&self) -> bool {
        self.label.is_some()
    }
}

/// Lifecycle phase of a session. `Finalized` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Active,
    Finalized,
}

/// Direction for cursor navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Labeling progress: how many items carry a label out of the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub labeled: usize,
    pub total: usize,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.labeled == self.total
    }
}

/// Human-readable metadata string for one item, so every surface renders
/// metadata identically: `position: 2 of 10 | id: 14 | source: forum`.
pub fn metadata_line(item: &DatasetItem, position: usize, total: usize) -> String {
    let mut line = format!("position: {} of {} | id: {}", position + 1, total, item.id);
    for (key, value) in &item.metadata {
        line.push_str(&format!(" | {key}: {}", scalar_text(value)));
    }
    line
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
