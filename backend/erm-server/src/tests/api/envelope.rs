use crate::ApiResponse;

use serde_json::json;

#[test]
fn test_list_envelope_carries_count() {
    let response = ApiResponse::list(vec!["a", "b"]);

    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value, json!({ "success": true, "data": ["a", "b"], "count": 2 }));
}

#[test]
fn test_single_envelope_omits_count() {
    let response = ApiResponse::ok(json!({ "id": "1" }));

    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value, json!({ "success": true, "data": { "id": "1" } }));
}
