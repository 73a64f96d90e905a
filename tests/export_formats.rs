// Export payload shape and the file formats built on it.

mod test_helpers;

use std::fs;

use serde_json::Value;
use test_helpers::three_item_session;
use text_annotator::{ExportDocument, ExportFormat, save_payload};

#[test]
fn payload_serializes_with_host_field_names() {
    let mut session = three_item_session();
    session.assign_label(0, &"positive".into()).unwrap();
    let payload = session.finalize("alice").unwrap();

    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(value["annotator"], "alice");
    let items = value["labelled_dataset"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    // Index addressing exports the label as a number; unlabeled items
    // carry no label key at all.
    assert_eq!(items[0]["label"], 0);
    assert!(items[1].get("label").is_none());
}

#[test]
fn metadata_keys_survive_in_input_order() {
    let mut session = three_item_session();
    let payload = session.finalize("alice").unwrap();

    let mut item = payload.labelled_dataset[0].clone();
    item.metadata.insert("source".to_string(), Value::from("forum"));
    item.metadata.insert("year".to_string(), Value::from(2024));

    let text = serde_json::to_string(&item).unwrap();
    assert!(text.find("source").unwrap() < text.find("year").unwrap());
}

#[test]
fn export_document_writes_pretty_json_with_an_info_block() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");

    let mut session = three_item_session();
    session.assign_label(1, &"negative".into()).unwrap();
    let payload = session.finalize("alice").unwrap();

    ExportDocument::new(payload).save(&path).unwrap();

    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["info"]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(value["annotator"], "alice");
    assert_eq!(value["labelled_dataset"].as_array().unwrap().len(), 3);
}

#[test]
fn json_lines_writes_one_record_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.jsonl");

    let mut session = three_item_session();
    session.assign_label(0, &"positive".into()).unwrap();
    let payload = session.finalize("alice").unwrap();

    let stats = save_payload(&payload, ExportFormat::JsonLines, &path).unwrap();
    assert_eq!(stats.items_exported, 3);
    assert_eq!(stats.labels_exported, 1);

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        let record: Value = serde_json::from_str(line).unwrap();
        assert!(record.get("id").is_some());
        assert!(record.get("text").is_some());
    }
}

#[test]
fn format_names_and_extensions() {
    assert_eq!(ExportFormat::Json.name(), "JSON");
    assert_eq!(ExportFormat::Json.extension(), "json");
    assert_eq!(ExportFormat::JsonLines.name(), "JSON Lines");
    assert_eq!(ExportFormat::JsonLines.extension(), "jsonl");
}
