use crate::client::detail::{NO_DETAIL, UNKNOWN_ERROR_DETAIL};
use crate::extract_detail;

#[test]
fn test_string_detail_used_verbatim() {
    let body = r#"{"detail": "Username already registered"}"#;
    assert_eq!(extract_detail(body), "Username already registered");
}

#[test]
fn test_json_without_detail_falls_back() {
    assert_eq!(extract_detail(r#"{"error": "boom"}"#), UNKNOWN_ERROR_DETAIL);
    assert_eq!(extract_detail(r#"{"detail": null}"#), UNKNOWN_ERROR_DETAIL);
    assert_eq!(extract_detail(r#"{"detail": "  "}"#), UNKNOWN_ERROR_DETAIL);
    assert_eq!(extract_detail("[1, 2]"), UNKNOWN_ERROR_DETAIL);
}

#[test]
fn test_non_json_body_falls_back() {
    assert_eq!(extract_detail("<html>Bad Gateway</html>"), NO_DETAIL);
    assert_eq!(extract_detail(""), NO_DETAIL);
}

#[test]
fn test_structured_detail_rendered_as_json() {
    let body = r#"{"detail": [{"loc": ["body", "email"], "msg": "field required"}]}"#;
    let detail = extract_detail(body);
    assert!(detail.starts_with('['));
    assert!(detail.contains("field required"));
}
