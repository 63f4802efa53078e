//! JSON request/response boundary around the conversion engine.
//!
//! A request is an object with four fields:
//!
//! ```json
//! {"command": "convert_datetime", "utc_datetime": "2024-01-15 10:00",
//!  "timezone_offset": 5, "is_dst": false}
//! ```
//!
//! Success replies carry `{"converted_datetime": {"date", "time"}}` with status
//! 200; every rejection carries `{"error": "..."}` with status 400. Loosely typed
//! callers are accommodated: the offset may arrive as a number or numeric string
//! and the DST flag as a bool, number or yes/no style string.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::converter::convert;
use crate::error::{ConvertError, Result, STATUS_OK};
use crate::types::{LocalResult, OffsetHours, UtcTimestamp};

/// The only accepted value of the request's `command` field.
pub const CONVERT_COMMAND: &str = "convert_datetime";

const FIELD_COMMAND: &str = "command";
const FIELD_UTC: &str = "utc_datetime";
const FIELD_OFFSET: &str = "timezone_offset";
const FIELD_DST: &str = "is_dst";

/// A validated conversion request, ready for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRequest {
    pub utc: UtcTimestamp,
    pub offset: OffsetHours,
    pub is_dst: bool,
}

/// Body of a successful reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResponse {
    pub converted_datetime: LocalResult,
}

/// Body of a rejected reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A transport-neutral reply: status code plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    fn success(response: &ConversionResponse) -> Self {
        Self {
            status: STATUS_OK,
            body: to_body(response),
        }
    }

    fn failure(err: &ConvertError) -> Self {
        Self {
            status: err.status_code(),
            body: to_body(&ErrorResponse {
                error: err.to_string(),
            }),
        }
    }
}

// Reply bodies hold only string fields, so serialization cannot fail.
fn to_body<T: Serialize>(body: &T) -> Value {
    serde_json::to_value(body).unwrap_or_default()
}

impl From<Result<ConversionResponse>> for Reply {
    fn from(result: Result<ConversionResponse>) -> Self {
        match result {
            Ok(response) => Reply::success(&response),
            Err(err) => Reply::failure(&err),
        }
    }
}

impl ConversionRequest {
    /// Validate and coerce a raw JSON request.
    ///
    /// Checks run in a fixed order: command marker, field presence and
    /// coercion (`utc_datetime`, `timezone_offset`, `is_dst`), offset range,
    /// and finally the timestamp pattern.
    ///
    /// # Errors
    /// Returns `ConvertError::MalformedCommand` if `value` is not an object or its
    /// `command` is not [`CONVERT_COMMAND`]. Returns `MissingField`,
    /// `TypeCoercion`, `OffsetOutOfRange` or `MalformedTimestamp` for the
    /// corresponding field failures.
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or(ConvertError::MalformedCommand)?;

        if object.get(FIELD_COMMAND).and_then(Value::as_str) != Some(CONVERT_COMMAND) {
            return Err(ConvertError::MalformedCommand);
        }

        let utc_raw = require(object, FIELD_UTC)?;
        let offset_hours = coerce_offset(require(object, FIELD_OFFSET)?)?;
        let is_dst = coerce_flag(require(object, FIELD_DST)?)?;

        let offset = OffsetHours::new(offset_hours)?;
        let utc = utc_raw
            .as_str()
            .ok_or_else(|| ConvertError::TypeCoercion {
                field: FIELD_UTC,
                expected: "a string",
                found: utc_raw.to_string(),
            })?
            .parse()?;

        Ok(Self {
            utc,
            offset,
            is_dst,
        })
    }
}

/// Validate `value` and run the engine on it.
pub fn handle_request(value: &Value) -> Result<ConversionResponse> {
    debug!(request = %value, "received conversion request");

    let request = ConversionRequest::from_json(value).inspect_err(|err| {
        debug!(error = %err, "rejected conversion request");
    })?;

    Ok(ConversionResponse {
        converted_datetime: convert(request.utc, request.offset, request.is_dst),
    })
}

/// Parse a raw request body and produce the reply a transport should send.
///
/// Never fails: unparseable bodies become an `InvalidJson` rejection.
pub fn handle_json(body: &str) -> Reply {
    let result = serde_json::from_str::<Value>(body)
        .map_err(|e| ConvertError::InvalidJson(e.to_string()))
        .and_then(|value| handle_request(&value));
    Reply::from(result)
}

fn require<'a>(object: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value> {
    object.get(field).ok_or(ConvertError::MissingField(field))
}

/// Coerce an offset to whole hours.
///
/// Integers pass through, finite floats truncate toward zero, strings are
/// trimmed and parsed as decimal integers, booleans map to 1/0. Numeric values
/// beyond `i64` saturate so the range check rejects them as out of range.
fn coerce_offset(value: &Value) -> Result<i64> {
    let mismatch = || ConvertError::TypeCoercion {
        field: FIELD_OFFSET,
        expected: "an integer",
        found: value.to_string(),
    };

    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if n.is_u64() {
                Ok(i64::MAX)
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() => Ok(f.trunc() as i64),
                    _ => Err(mismatch()),
                }
            }
        }
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(i) => Ok(i),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(mismatch()),
            },
        },
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(mismatch()),
    }
}

/// Coerce a DST flag to a bool.
fn coerce_flag(value: &Value) -> Result<bool> {
    let mismatch = || ConvertError::TypeCoercion {
        field: FIELD_DST,
        expected: "a boolean",
        found: value.to_string(),
    };

    match value {
        Value::Bool(b) => Ok(*b),
        Value::Null => Ok(false),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" | "" => Ok(false),
            _ => Err(mismatch()),
        },
        Value::Array(_) | Value::Object(_) => Err(mismatch()),
    }
}
