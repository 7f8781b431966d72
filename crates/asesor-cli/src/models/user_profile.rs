use serde::Deserialize;

/// Public part of a backend user record.
///
/// The lookup endpoint also returns the stored password hash; it is not
/// deserialized, so it never lives in client memory past the response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub apellido: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
}
