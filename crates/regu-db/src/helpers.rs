//! Typed column readers for `libsql::Row`.
//!
//! The schema stores timestamps as TEXT filled by `datetime('now')`, which
//! yields `"2026-08-09 14:30:00"`, while rows written through the remote
//! sync path may carry RFC 3339 strings. These readers accept both, and
//! decode vocabulary columns through the same serde names the entities use.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::error::DbError;

/// Read a TEXT timestamp column.
///
/// # Errors
///
/// Returns `DbError::Query` when the column is not a valid timestamp in
/// either accepted format.
pub fn datetime_column(row: &libsql::Row, idx: i32) -> Result<DateTime<Utc>, DbError> {
    parse_datetime(&row.get::<String>(idx)?)
}

/// Read a nullable TEXT timestamp column. NULL and `""` both read as `None`.
///
/// # Errors
///
/// Returns `DbError::Query` when a present value cannot be parsed.
pub fn optional_datetime_column(
    row: &libsql::Row,
    idx: i32,
) -> Result<Option<DateTime<Utc>>, DbError> {
    optional_text_column(row, idx)?
        .map(|text| parse_datetime(&text))
        .transpose()
}

/// Read a TEXT vocabulary column into one of the snake_case serde enums.
///
/// # Errors
///
/// Returns `DbError::Query` when the stored string matches no variant.
pub fn enum_column<T: DeserializeOwned>(row: &libsql::Row, idx: i32) -> Result<T, DbError> {
    let raw = row.get::<String>(idx)?;
    serde_json::from_value(serde_json::Value::String(raw.clone()))
        .map_err(|e| DbError::Query(format!("unknown stored value '{raw}': {e}")))
}

/// Read a nullable TEXT column. NULL and `""` both read as `None`.
///
/// `row.get::<String>` errors on NULL, so nullable columns must go through
/// `Option<String>`.
///
/// # Errors
///
/// Returns `DbError` when the column read itself fails.
pub fn optional_text_column(row: &libsql::Row, idx: i32) -> Result<Option<String>, DbError> {
    Ok(row.get::<Option<String>>(idx)?.filter(|text| !text.is_empty()))
}

fn parse_datetime(raw: &str) -> Result<DateTime<Utc>, DbError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DbError::Query(format!("bad timestamp '{raw}': {e}")))
}
