use crate::models::time_format::serialize_hhmm;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Owner reference carried by a new session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOwner {
    UsuarioId(i64),
    Username(String),
}

/// Request body for `POST /asesorias`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSession {
    pub titulo: String,
    pub descripcion: String,
    pub fecha: NaiveDate,
    #[serde(serialize_with = "serialize_hhmm")]
    pub hora: NaiveTime,
    pub profesor: String,
    #[serde(flatten)]
    pub owner: SessionOwner,
}
