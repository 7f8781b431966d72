use serde_json::Value;

pub(crate) const UNKNOWN_ERROR_DETAIL: &str = "Unknown server error.";
pub(crate) const NO_DETAIL: &str = "No detailed response from the server.";

/// Pull the server's explanation out of an error body.
///
/// Uses the `detail` field of a JSON body. Structured details (validation
/// error lists) are rendered as compact JSON. Bodies that are not JSON get a
/// generic message.
pub fn extract_detail(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => match value.get("detail") {
            Some(Value::String(detail)) if !detail.trim().is_empty() => detail.clone(),
            Some(Value::String(_)) | Some(Value::Null) | None => UNKNOWN_ERROR_DETAIL.to_string(),
            Some(other) => other.to_string(),
        },
        Err(_) => NO_DETAIL.to_string(),
    }
}
