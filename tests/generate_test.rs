//! End-to-end generation against a real output directory.

use std::path::Path;
use std::sync::Arc;

use mimesis::adapters::driver::ExampleGenerator;
use mimesis::adapters::loader::dereference;
use mimesis::adapters::writer::FileWriter;
use mimesis::config::Settings;
use mimesis::domain::ApiDocument;
use serde_json::json;

fn settings(output: &Path, minimal: bool) -> Settings {
    Settings {
        source_url: "http://localhost/swagger.json".to_string(),
        proxy: None,
        verb: "post".to_string(),
        output_folder: output.to_path_buf(),
        minimal,
        verbose: false,
        match_all: false,
        pretty: false,
        targets: Vec::new(),
    }
}

fn widget_document(required: bool) -> ApiDocument {
    let mut schema = json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "count": {"type": "integer"}
        }
    });
    if required {
        schema["required"] = json!(["name"]);
    }
    serde_json::from_value(json!({
        "paths": {
            "/widgets": {
                "post": {
                    "parameters": [{"in": "body", "name": "widget", "schema": schema}]
                }
            }
        }
    }))
    .unwrap()
}

#[tokio::test]
async fn test_generates_example_file_for_post_operation() {
    let dir = tempfile::tempdir().unwrap();
    let writer = Arc::new(FileWriter::new(dir.path()));
    let generator = ExampleGenerator::new(settings(dir.path(), false), writer);

    let summary = generator.run(&widget_document(false)).await.unwrap();
    assert_eq!(summary.written, 1);

    let content = std::fs::read_to_string(dir.path().join("op-widgets-post.json")).unwrap();
    assert_eq!(content, r#"{"name":"sampleName","count":10}"#);
}

#[tokio::test]
async fn test_minimal_mode_writes_required_fields_only() {
    let dir = tempfile::tempdir().unwrap();
    let writer = Arc::new(FileWriter::new(dir.path()));
    let generator = ExampleGenerator::new(settings(dir.path(), true), writer);

    let summary = generator.run(&widget_document(true)).await.unwrap();
    assert_eq!(summary.written, 1);

    let content = std::fs::read_to_string(dir.path().join("op-widgets-post.json")).unwrap();
    assert_eq!(content, r#"{"name":"sampleName"}"#);
}

#[tokio::test]
async fn test_missing_output_folder_is_nonfatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let writer = Arc::new(FileWriter::new(&missing));
    let generator = ExampleGenerator::new(settings(&missing, false), writer);

    // The run must complete; the failed write is only reported.
    let summary = generator.run(&widget_document(false)).await.unwrap();
    assert_eq!(summary.written, 0);
}

#[tokio::test]
async fn test_document_with_refs_generates_after_dereference() {
    let raw = json!({
        "paths": {
            "/orders": {
                "post": {
                    "parameters": [
                        {"in": "body", "name": "order", "schema": {"$ref": "#/definitions/Order"}}
                    ]
                }
            }
        },
        "definitions": {
            "Order": {
                "type": "object",
                "properties": {
                    "orderId": {"type": "integer"},
                    "comment": {"type": "string"}
                }
            }
        }
    });
    let document: ApiDocument = serde_json::from_value(dereference(&raw).unwrap()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let writer = Arc::new(FileWriter::new(dir.path()));
    let generator = ExampleGenerator::new(settings(dir.path(), false), writer);

    let summary = generator.run(&document).await.unwrap();
    assert_eq!(summary.written, 1);

    let content = std::fs::read_to_string(dir.path().join("op-orders-post.json")).unwrap();
    assert_eq!(content, r#"{"orderId":101,"comment":"Sample comment"}"#);
}
