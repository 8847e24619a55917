//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies carry identifiers, dates and times as strings so malformed
//! values produce field-level `invalid_request` errors instead of opaque
//! deserialisation failures.

use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use uuid::Uuid;

use crate::domain::{Error, UserId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    InvalidDate,
    InvalidTime,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::InvalidTime => "invalid_time",
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

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a valid UUID"))
        .with_value(ErrorCode::InvalidUuid, value)
}

pub(crate) fn parse_uuid(value: String, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(&value).map_err(|_| invalid_uuid_error(field, &value))
}

pub(crate) fn parse_user_id(value: String, field: FieldName) -> Result<UserId, Error> {
    UserId::new(&value).map_err(|_| invalid_uuid_error(field, &value))
}

pub(crate) fn parse_date(value: String, field: FieldName) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
        let name = field.as_str();
        ValidationError::new(name, format!("{name} must be a calendar date (YYYY-MM-DD)"))
            .with_value(ErrorCode::InvalidDate, value.as_str())
    })
}

/// Parse a time of day given as `HH:MM` or `HH:MM:SS`.
pub(crate) fn parse_time(value: String, field: FieldName) -> Result<NaiveTime, Error> {
    NaiveTime::parse_from_str(&value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&value, "%H:%M:%S"))
        .map_err(|_| {
            let name = field.as_str();
            ValidationError::new(name, format!("{name} must be a time of day (HH:MM)"))
                .with_value(ErrorCode::InvalidTime, value.as_str())
        })
}

/// Parse an optional time; absence is left for the domain to judge.
pub(crate) fn parse_optional_time(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<NaiveTime>, Error> {
    value.map(|raw| parse_time(raw, field)).transpose()
}
