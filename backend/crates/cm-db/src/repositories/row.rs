//! Column parsing shared by the repositories.
//!
//! The schema stores uuids as TEXT, instants as unix seconds and dates
//! as ISO-8601 TEXT; these helpers turn raw columns back into domain
//! types, naming the offending column on failure.

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, Utc};
use cm_core::ErrorLocation;
use uuid::Uuid;

#[track_caller]
pub(crate) fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid UUID in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_opt_uuid(value: Option<&str>, column: &str) -> DbErrorResult<Option<Uuid>> {
    value.map(|v| parse_uuid(v, column)).transpose()
}

#[track_caller]
pub(crate) fn parse_timestamp(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

pub(crate) fn parse_opt_timestamp(
    value: Option<i64>,
    column: &str,
) -> DbErrorResult<Option<DateTime<Utc>>> {
    value.map(|v| parse_timestamp(v, column)).transpose()
}

/// Parse a status/category column through the domain enum's `FromStr`
#[track_caller]
pub(crate) fn parse_enum<T>(value: &str, column: &str) -> DbErrorResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    T::from_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid value in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_date(value: &str, column: &str) -> DbErrorResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| DbError::Initialization {
        message: format!("Invalid date in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

pub(crate) fn parse_opt_date(value: Option<&str>, column: &str) -> DbErrorResult<Option<NaiveDate>> {
    value.map(|v| parse_date(v, column)).transpose()
}
