// Shared constructors for session test scenarios.
#![allow(dead_code)]

use serde_json::json;
use text_annotator::{DatasetItem, LabelSet, Session, SessionConfig};

/// Three unlabeled items with ids 1..=3.
pub fn three_items() -> Vec<DatasetItem> {
    vec![
        DatasetItem::new(1, "a"),
        DatasetItem::new(2, "b"),
        DatasetItem::new(3, "c"),
    ]
}

/// The label set used across scenarios.
pub fn sentiment_labels() -> LabelSet {
    LabelSet::new(["positive", "negative"])
}

/// Session over `three_items` with default config.
pub fn three_item_session() -> Session {
    Session::new(&three_items(), sentiment_labels(), SessionConfig::default())
}

/// Session with a custom config over `three_items`.
pub fn three_item_session_with(config: SessionConfig) -> Session {
    Session::new(&three_items(), sentiment_labels(), config)
}

/// An item carrying extra metadata fields.
pub fn item_with_metadata() -> DatasetItem {
    let mut item = DatasetItem::new(7, "text with context");
    item.metadata.insert("source".to_string(), json!("forum"));
    item.metadata.insert("year".to_string(), json!(2024));
    item
}
