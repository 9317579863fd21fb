use crate::common::hash::IdentityToken;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Reference counted handle to a host object.
///
/// Clones share the allocation, and so share identity. Two handles are the same object only if
/// they point at the same allocation; the payload is never compared.
#[derive(Clone)]
pub struct HostObject(Arc<dyn Any + Send + Sync>);

impl HostObject {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Identity of the allocation. Stable for as long as any handle is alive.
    pub fn identity_token(&self) -> IdentityToken {
        IdentityToken::from_address(self.addr())
    }

    #[inline]
    pub fn ptr_eq(&self, other: &HostObject) -> bool {
        self.addr() == other.addr()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }
}

impl PartialEq for HostObject {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for HostObject {}

impl fmt::Debug for HostObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostObject({:#x})", self.addr())
    }
}

/// A dynamically typed host value, as handed to the entry points.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Object(HostObject),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Object(_) => "object",
        }
    }
}

/// Strict equality. Objects compare by identity and `NaN` is unequal to itself.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<HostObject> for Value {
    fn from(value: HostObject) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objects_compare_by_identity() {
        let a = HostObject::new(String::from("x"));
        let b = HostObject::new(String::from("x"));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(Value::Object(a.clone()), Value::Object(a.clone()));
        assert_ne!(Value::Object(a), Value::Object(b));
    }

    #[test]
    fn identity_token_is_stable_for_clones() {
        let a = HostObject::new(5_u8);
        let b = a.clone();
        assert_eq!(a.identity_token(), b.identity_token());
        assert_eq!(a.identity_token(), a.identity_token());
    }

    #[test]
    fn strict_equality() {
        assert_eq!(Value::Undefined, Value::Undefined);
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Null, Value::Undefined);
        assert_ne!(Value::from(1), Value::from("1"));
        assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_eq!(Value::from(0.0), Value::from(-0.0));
        assert_eq!(Value::from(None::<bool>), Value::Null);
        assert_eq!(Value::from(Some(true)), Value::Bool(true));
    }

    #[test]
    fn payload_is_reachable() {
        let obj = HostObject::new(vec![1, 2, 3]);
        assert_eq!(obj.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3]));
        assert!(obj.downcast_ref::<String>().is_none());
        assert_eq!(Value::Object(obj).type_name(), "object");
    }
}
