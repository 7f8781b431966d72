//! `HH:MM` wire format for session times.

use chrono::NaiveTime;
use serde::Serializer;

pub(crate) const TIME_FORMAT: &str = "%H:%M";
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn serialize_hhmm<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&time.format(TIME_FORMAT))
}

pub(crate) fn serialize_hhmm_opt<S>(
    time: &Option<NaiveTime>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match time {
        Some(time) => serialize_hhmm(time, serializer),
        None => serializer.serialize_none(),
    }
}
