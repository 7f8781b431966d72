use serde::{Deserialize, Deserializer, Serialize};

/// A tutoring session as returned by the backend.
///
/// Display copy only: dates and times are kept exactly as the server sent them.
/// Missing or `null` text fields read as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutoringSession {
    pub id: i64,
    #[serde(default, alias = "title", deserialize_with = "null_as_empty")]
    pub titulo: String,
    #[serde(default, alias = "description", deserialize_with = "null_as_empty")]
    pub descripcion: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fecha: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hora: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub profesor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
