use super::*;
use serde_json::json;

// =============================================================
// Command
// =============================================================

#[test]
fn command_names_match_endpoints() {
    let names: Vec<&str> = Command::ALL.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["read", "write", "update", "search"]);
}

#[test]
fn command_labels_are_capitalized_names() {
    for command in Command::ALL {
        let mut chars = command.name().chars();
        let first = chars.next().unwrap().to_ascii_uppercase();
        let expected: String = std::iter::once(first).chain(chars).collect();
        assert_eq!(command.label(), expected);
    }
}

#[test]
fn search_takes_key_argument_others_take_filter() {
    assert_eq!(Command::Search.argument_param(), "key");
    assert_eq!(Command::Read.argument_param(), "filter");
    assert_eq!(Command::Write.argument_param(), "filter");
    assert_eq!(Command::Update.argument_param(), "filter");
}

// =============================================================
// cell_text
// =============================================================

#[test]
fn cell_text_renders_scalars() {
    assert_eq!(cell_text(&json!("SONAR_TOKEN")), "SONAR_TOKEN");
    assert_eq!(cell_text(&json!(42)), "42");
    assert_eq!(cell_text(&json!(1.5)), "1.5");
    assert_eq!(cell_text(&json!(true)), "true");
    assert_eq!(cell_text(&json!(false)), "false");
}

#[test]
fn cell_text_renders_null_as_empty() {
    assert_eq!(cell_text(&Value::Null), "");
}

#[test]
fn cell_filter_text_spells_out_null() {
    assert_eq!(cell_filter_text(&Value::Null), "null");
}

#[test]
fn cell_filter_text_matches_display_text_for_non_null() {
    for value in [json!("dev"), json!(7), json!(false), json!({"a": [1]})] {
        assert_eq!(cell_filter_text(&value), cell_text(&value));
    }
}

#[test]
fn cell_text_renders_nested_values_as_json() {
    assert_eq!(cell_text(&json!([1, 2])), "[1,2]");
    assert_eq!(cell_text(&json!({"a": 1})), r#"{"a":1}"#);
}

// =============================================================
// parse_dataset
// =============================================================

#[test]
fn parse_dataset_preserves_row_and_key_order() {
    let body = r#"[
        {"project_id": 7, "variable_key": "B", "group": "ops"},
        {"project_id": 3, "variable_key": "A", "group": "dev"}
    ]"#;
    let rows = parse_dataset(body).unwrap();
    assert_eq!(rows.len(), 2);
    let keys: Vec<&String> = rows[0].keys().collect();
    assert_eq!(keys, vec!["project_id", "variable_key", "group"]);
    assert_eq!(rows[1]["project_id"], json!(3));
}

#[test]
fn parse_dataset_accepts_empty_array() {
    assert!(parse_dataset("[]").unwrap().is_empty());
}

#[test]
fn parse_dataset_rejects_error_object() {
    assert!(parse_dataset(r#"{"error": "File not found"}"#).is_err());
}

#[test]
fn parse_dataset_rejects_malformed_json() {
    assert!(parse_dataset("[{").is_err());
}
