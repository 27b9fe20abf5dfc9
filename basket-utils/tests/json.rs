use basket_utils::*;
use serde_json::json;

#[test]
fn test_jsonify_sorts_keys_recursively() {
    let value = json!({
        "total_value": 1,
        "items": [{"weight": 2, "id": 1}],
        "algorithm": "bfs",
    });
    assert_eq!(
        jsonify(&value),
        r#"{"algorithm":"bfs","items":[{"id":1,"weight":2}],"total_value":1}"#
    );
}

#[test]
fn test_dejsonify_file_reports_path() {
    let err = dejsonify_file::<serde_json::Value, _>("/nonexistent/catalog.json").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/catalog.json"));
}
