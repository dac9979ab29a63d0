//! Shared validation helpers for inbound HTTP adapters.

use chrono::NaiveDate;
use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    EmptyField,
    InvalidValue,
    InvalidDate,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::EmptyField => "empty_field",
            ErrorCode::InvalidValue => "invalid_value",
            ErrorCode::InvalidDate => "invalid_date",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn validation_error(field: FieldName, message: String, code: ErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn validation_error_with_value(
    field: FieldName,
    message: String,
    code: ErrorCode,
    value: &str,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    validation_error(
        field,
        format!("missing required field: {name}"),
        ErrorCode::MissingField,
    )
}

pub(crate) fn empty_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    validation_error(
        field,
        format!("{name} must not be empty"),
        ErrorCode::EmptyField,
    )
}

pub(crate) fn invalid_value_error(field: FieldName, value: &str, allowed: &str) -> Error {
    let name = field.as_str();
    validation_error_with_value(
        field,
        format!("{name} must be {allowed}"),
        ErrorCode::InvalidValue,
        value,
    )
}

pub(crate) fn invalid_date_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    validation_error_with_value(
        field,
        format!("{name} must be a calendar date in YYYY-MM-DD format"),
        ErrorCode::InvalidDate,
        value,
    )
}

/// Parse a `YYYY-MM-DD` calendar date.
pub(crate) fn parse_calendar_date(value: &str, field: FieldName) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid_date_error(field, value))
}
