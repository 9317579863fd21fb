use crate::common::logging::log_debug;
use crate::error::{OidError, OidResult};
use crate::module::{HostObject, Value};

/// Resolves an `objectIdHash` argument. `Ok(None)` is the null marker.
///
/// Null is tested before anything else, so it can never be reported as "not an object".
pub fn parse_object_arg(value: &Value) -> OidResult<Option<&HostObject>> {
    match value {
        Value::Null => Ok(None),
        Value::Object(obj) => Ok(Some(obj)),
        other => {
            log_debug(format!(
                "objectIdHash: cannot resolve {} to an object",
                other.type_name()
            ));
            Err(OidError::NotAnObject)
        }
    }
}

/// Coerces a `numberIdHash` argument to an `f64`.
pub fn parse_number_arg(value: &Value) -> OidResult<f64> {
    let number = match value {
        Value::Number(n) => Some(*n),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::String(s) => parse_number(s),
        Value::Undefined | Value::Object(_) => None,
    };
    number.ok_or_else(|| {
        log_debug(format!(
            "numberIdHash: cannot coerce {} to a number",
            value.type_name()
        ));
        OidError::NotANumber
    })
}

/// Trimmed decimal or exponent notation, plus the `inf`/`infinity`/`nan` spellings `f64`
/// parsing accepts. Blank strings are zero.
fn parse_number(s: &str) -> Option<f64> {
    match s.trim() {
        "" => Some(0.0),
        s => s.parse::<f64>().ok(),
    }
}
