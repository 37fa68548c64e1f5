//! Lenient scalar shapes shared by the backend payloads.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{Amount, TypeConstraintError};

/// A number the backend may send either as JSON number or as numeric string.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum WireNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl WireNumber {
    pub fn as_i64(&self) -> Result<i64, TypeConstraintError> {
        match self {
            WireNumber::Int(value) => Ok(*value),
            WireNumber::Float(value) if value.fract() == 0.0 && value.is_finite() => {
                Ok(*value as i64)
            }
            WireNumber::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| TypeConstraintError::InvalidValue(text.clone())),
            WireNumber::Float(value) => Err(TypeConstraintError::InvalidValue(value.to_string())),
        }
    }

    pub fn as_i32(&self) -> Result<i32, TypeConstraintError> {
        let value = self.as_i64()?;
        i32::try_from(value).map_err(|_| TypeConstraintError::InvalidValue(value.to_string()))
    }

    /// Counts such as stock or quantity; negative values are rejected.
    pub fn as_count(&self) -> Result<u32, TypeConstraintError> {
        let value = self.as_i64()?;
        u32::try_from(value).map_err(|_| TypeConstraintError::InvalidValue(value.to_string()))
    }

    pub fn as_f64(&self) -> Result<f64, TypeConstraintError> {
        match self {
            WireNumber::Int(value) => Ok(*value as f64),
            WireNumber::Float(value) => Ok(*value),
            WireNumber::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| TypeConstraintError::InvalidAmount(text.clone())),
        }
    }

    pub fn as_amount(&self) -> Result<Amount, TypeConstraintError> {
        Amount::new(self.as_f64()?)
    }
}

impl From<i32> for WireNumber {
    fn from(value: i32) -> Self {
        WireNumber::Int(i64::from(value))
    }
}

/// Parses the timestamp formats seen in backend payloads. Unparseable input
/// yields `None` rather than an error.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

pub fn parse_optional_timestamp(raw: Option<&str>) -> Option<NaiveDateTime> {
    raw.and_then(parse_timestamp)
}
