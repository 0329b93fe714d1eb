//! Integration tests for the parameter filter
//!
//! These tests wire a sanitizer built from file-style settings into the
//! filter and run it over a request's parameters.

use panmask::{Sanitizer, Settings};
use panmask_filter::{parameter_filter_with, redact_json};
use serde_json::{Map, Value, json};

#[test]
fn test_filter_request_params_from_yaml_settings() {
    let settings = Settings::from_yaml_str(
        "replacement_token: \"X\"\nexpose_first: 4\nuse_groupings: true\nparse_flanking: true\n",
    )
    .unwrap();
    let filter = parameter_filter_with(Sanitizer::new(settings));

    let params = json!({
        "card_number": "4111 1111 1111 1111",
        "phone": "+4111111111111111",
        "odd": "41 11 11 11 11 11 11 11",
        "quantity": 2
    });

    let filtered: Map<String, Value> = params
        .as_object()
        .unwrap()
        .iter()
        .map(|(key, value)| (key.clone(), filter(key.as_str(), value.clone())))
        .collect();

    assert_eq!(filtered["card_number"], json!("4111 XXXX XXXX 1111"));
    assert_eq!(filtered["phone"], json!("+4111111111111111"));
    assert_eq!(filtered["odd"], json!("41 11 11 11 11 11 11 11"));
    assert_eq!(filtered["quantity"], json!(2));
}

#[test]
fn test_redact_json_leaves_clean_documents_alone() {
    let sanitizer = Sanitizer::default();
    let mut payload = json!({"user": "alice", "tags": ["a", "b"], "id": 12345678901234u64});
    let original = payload.clone();

    assert_eq!(redact_json(&sanitizer, &mut payload), 0);
    assert_eq!(payload, original);
}
