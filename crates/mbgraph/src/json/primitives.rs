// SPDX-License-Identifier: GPL-3.0-or-later

//! Scalar decoders shared by every object reader.

use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{JsonValue, ReadValue};
use crate::error::DecodeError;
use crate::partial_date::PartialDate;

impl ReadValue for JsonValue {
    fn read_value(value: JsonValue) -> Result<Self, DecodeError> {
        Ok(value)
    }
}

impl ReadValue for String {
    fn read_value(value: JsonValue) -> Result<Self, DecodeError> {
        match value {
            JsonValue::String(text) => Ok(text),
            other => Err(DecodeError::unexpected("string", &other)),
        }
    }
}

impl ReadValue for bool {
    fn read_value(value: JsonValue) -> Result<Self, DecodeError> {
        match value {
            JsonValue::Bool(flag) => Ok(flag),
            other => Err(DecodeError::unexpected("boolean", &other)),
        }
    }
}

fn read_unsigned(value: &JsonValue) -> Result<u64, DecodeError> {
    match value {
        JsonValue::Number(number) => number
            .as_u64()
            .ok_or_else(|| DecodeError::invalid(format!("{number} is not a non-negative integer"))),
        other => Err(DecodeError::unexpected("integer", other)),
    }
}

macro_rules! read_unsigned_as {
    ($($ty:ty),*) => {
        $(
            impl ReadValue for $ty {
                fn read_value(value: JsonValue) -> Result<Self, DecodeError> {
                    let number = read_unsigned(&value)?;
                    <$ty>::try_from(number).map_err(|_| {
                        DecodeError::invalid(format!(
                            "{number} is out of range for {}",
                            stringify!($ty)
                        ))
                    })
                }
            }
        )*
    };
}

read_unsigned_as!(u8, u16, u32, usize);

impl ReadValue for u64 {
    fn read_value(value: JsonValue) -> Result<Self, DecodeError> {
        read_unsigned(&value)
    }
}

impl ReadValue for i64 {
    fn read_value(value: JsonValue) -> Result<Self, DecodeError> {
        match value {
            JsonValue::Number(number) => number
                .as_i64()
                .ok_or_else(|| DecodeError::invalid(format!("{number} is not an integer"))),
            other => Err(DecodeError::unexpected("integer", &other)),
        }
    }
}

impl ReadValue for i32 {
    fn read_value(value: JsonValue) -> Result<Self, DecodeError> {
        let number = i64::read_value(value)?;
        i32::try_from(number)
            .map_err(|_| DecodeError::invalid(format!("{number} is out of range for i32")))
    }
}

impl ReadValue for f64 {
    fn read_value(value: JsonValue) -> Result<Self, DecodeError> {
        match value {
            JsonValue::Number(number) => number
                .as_f64()
                .ok_or_else(|| DecodeError::invalid(format!("{number} is not a finite number"))),
            other => Err(DecodeError::unexpected("number", &other)),
        }
    }
}

impl ReadValue for Uuid {
    fn read_value(value: JsonValue) -> Result<Self, DecodeError> {
        let text = String::read_value(value)?;
        Uuid::parse_str(&text)
            .map_err(|error| DecodeError::invalid(format!("`{text}` is not a valid MBID: {error}")))
    }
}

impl ReadValue for url::Url {
    fn read_value(value: JsonValue) -> Result<Self, DecodeError> {
        let text = String::read_value(value)?;
        url::Url::parse(&text)
            .map_err(|error| DecodeError::invalid(format!("`{text}` is not a valid URI: {error}")))
    }
}

/// Durations travel as integer milliseconds.
impl ReadValue for Duration {
    fn read_value(value: JsonValue) -> Result<Self, DecodeError> {
        read_unsigned(&value).map(Duration::from_millis)
    }
}

impl ReadValue for DateTime<Utc> {
    fn read_value(value: JsonValue) -> Result<Self, DecodeError> {
        let text = String::read_value(value)?;
        DateTime::parse_from_rfc3339(&text)
            .map(|timestamp| timestamp.with_timezone(&Utc))
            .map_err(|error| DecodeError::invalid(format!("`{text}` is not a timestamp: {error}")))
    }
}

/// Either a bare year or a `YYYY`, `YYYY-MM`, `YYYY-MM-DD` string.
impl ReadValue for PartialDate {
    fn read_value(value: JsonValue) -> Result<Self, DecodeError> {
        match value {
            JsonValue::Number(_) => {
                let year = u16::read_value(value)?;
                PartialDate::new(Some(year), None, None)
                    .map_err(|error| DecodeError::invalid(error.to_string()))
            }
            JsonValue::String(text) => text
                .parse()
                .map_err(|error: crate::partial_date::PartialDateError| {
                    DecodeError::invalid(error.to_string())
                }),
            other => Err(DecodeError::unexpected("partial date", &other)),
        }
    }
}
