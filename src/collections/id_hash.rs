use crate::common::constants::{FALSE_HASH, TRUE_HASH};
use crate::common::hash::{numeric_hash, object_identity_hash, string_hash};
use crate::module::{id_hash, HostObject, Value};

/// Identity hash in `[1, 0x7fffffff]`.
///
/// Consistent with `PartialEq` except for floats, which hash by bit pattern: `0.0 == -0.0` but
/// the two land in different buckets, so identity collections treat them as distinct keys.
pub trait IdHash {
    fn id_hash(&self) -> i32;
}

impl IdHash for Value {
    fn id_hash(&self) -> i32 {
        id_hash(self)
    }
}

impl IdHash for HostObject {
    fn id_hash(&self) -> i32 {
        object_identity_hash(Some(self.identity_token()))
    }
}

impl IdHash for f64 {
    fn id_hash(&self) -> i32 {
        numeric_hash(*self)
    }
}

impl IdHash for bool {
    fn id_hash(&self) -> i32 {
        if *self {
            TRUE_HASH
        } else {
            FALSE_HASH
        }
    }
}

impl IdHash for str {
    fn id_hash(&self) -> i32 {
        string_hash(self)
    }
}

impl IdHash for String {
    fn id_hash(&self) -> i32 {
        string_hash(self)
    }
}

impl<T: IdHash + ?Sized> IdHash for &T {
    fn id_hash(&self) -> i32 {
        (**self).id_hash()
    }
}
