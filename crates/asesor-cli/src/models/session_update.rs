use crate::models::time_format::serialize_hhmm_opt;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Request body for `PUT /asesorias/{id}`; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titulo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha: Option<NaiveDate>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_hhmm_opt"
    )]
    pub hora: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profesor: Option<String>,
}

