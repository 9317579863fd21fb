//! Identity hashes for host objects and values.
//!
//! [`object_id_hash`] and [`number_id_hash`] are the two functions a host binds. Both return a
//! hash in `[1, 0x7fffffff]`, never zero, so the result can be used directly as a table key.
//! The remaining modules build identity keyed sets and maps on top of them.
pub mod collections;
pub mod common;
pub mod config;
mod error;
pub mod error_consts;
pub mod module;
#[cfg(test)]
mod tests;

pub use collections::{dedup, IdHash, IdentityMap, IdentitySet};
pub use common::hash::{
    normalize_hash, numeric_hash, object_identity_hash, string_hash, IdentityToken,
};
pub use common::parallel::{id_hashes, number_id_hashes};
pub use error::{OidError, OidResult};
pub use module::{id_hash, number_id_hash, object_id_hash, HostObject, Value};

pub const MODULE_NAME: &str = "oid";
