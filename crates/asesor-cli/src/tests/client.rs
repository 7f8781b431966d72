use crate::{Client, ClientError};

use std::time::Duration;

fn client(base: &str) -> Client {
    Client::new(base, Duration::from_secs(5)).unwrap()
}

#[test]
fn test_endpoint_on_bare_host() {
    let client = client("http://localhost:8000");
    let url = client.endpoint(&["asesorias"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8000/asesorias");
}

#[test]
fn test_endpoint_trailing_slash_not_doubled() {
    let client = client("http://localhost:8000/");
    let url = client.endpoint(&["auth", "token"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8000/auth/token");
}

#[test]
fn test_endpoint_keeps_base_path_prefix() {
    let client = client("https://example.com/api/v1/");
    let url = client.endpoint(&["asesorias", "42"]).unwrap();
    assert_eq!(url.as_str(), "https://example.com/api/v1/asesorias/42");
}

#[test]
fn test_endpoint_percent_encodes_username() {
    let client = client("http://localhost:8000");
    let url = client
        .endpoint(&["usuarios", "username", "ana maría/x"])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "http://localhost:8000/usuarios/username/ana%20mar%C3%ADa%2Fx"
    );
}

#[test]
fn test_base_url_whitespace_trimmed() {
    let client = client("  http://localhost:8000  ");
    assert_eq!(client.base_url().as_str(), "http://localhost:8000/");
}

#[test]
fn test_invalid_base_url_rejected() {
    let result = Client::new("not a url", Duration::from_secs(5));
    assert!(matches!(result, Err(ClientError::Url { .. })));
}

#[test]
fn test_non_base_url_rejected() {
    let result = Client::new("mailto:someone@example.com", Duration::from_secs(5));
    assert!(matches!(result, Err(ClientError::Url { .. })));
}
