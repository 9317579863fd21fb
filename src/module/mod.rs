//! Host binding surface: dynamic host values, argument coercion and the exported functions.
pub mod arg_parse;
pub mod exports;
mod value;

pub use exports::*;
pub use value::*;

use crate::common::constants::{FALSE_HASH, TRUE_HASH, UNDEFINED_HASH};
use crate::common::hash::{numeric_hash, object_identity_hash, string_hash};
use crate::error::OidResult;
use arg_parse::{parse_number_arg, parse_object_arg};

/// `objectIdHash`: identity hash of an object, or `99961` for null.
///
/// Fails with `NotAnObject` for anything that is neither.
pub fn object_id_hash(value: &Value) -> OidResult<i32> {
    let obj = parse_object_arg(value)?;
    Ok(object_identity_hash(obj.map(HostObject::identity_token)))
}

/// `numberIdHash`: bit pattern hash of the value coerced to `f64`.
///
/// Fails with `NotANumber` when the value has no numeric reading.
pub fn number_id_hash(value: &Value) -> OidResult<i32> {
    parse_number_arg(value).map(numeric_hash)
}

/// Identity hash of any value. Never fails.
///
/// Numbers hash by bit pattern, so `0.0` and `-0.0` hash apart even though they are strictly
/// equal. Every other pair of strictly equal values hashes equally.
pub fn id_hash(value: &Value) -> i32 {
    match value {
        Value::Number(n) => numeric_hash(*n),
        Value::String(s) => string_hash(s),
        Value::Bool(true) => TRUE_HASH,
        Value::Bool(false) => FALSE_HASH,
        Value::Undefined => UNDEFINED_HASH,
        Value::Null => object_identity_hash(None),
        Value::Object(obj) => object_identity_hash(Some(obj.identity_token())),
    }
}
