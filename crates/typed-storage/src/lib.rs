//! Typed values to opaque strings and back.
//!
//! Values are stored in string-only key-value stores (browser storage, an
//! in-memory map) and come back with their original type. The requested type
//! picks an encoding family ([`ValueKind`]); strings are stored verbatim and
//! `None` is never encoded at all.
//!
//! ```ignore
//! let encoded = typed_storage::serialize(Some(&vec![1i32, 2, 3]))?;
//! let decoded: Option<Vec<i32>> = typed_storage::deserialize(encoded.as_deref())?;
//! ```

pub mod classify;
pub mod codec;
pub mod descriptor;
pub mod error;
pub mod kind;
pub mod options;
pub mod storage;
pub mod stream;
pub mod value;

mod strategy;

pub use crate::classify::{TypeClassificationTable, classify_descriptor};
pub use crate::codec::StorageSerializer;
pub use crate::descriptor::{Storable, TypeDescriptor};
pub use crate::error::{Error, Result, SerializationError};
pub use crate::kind::ValueKind;
pub use crate::options::Options;
pub use crate::storage::{KeyValueStore, MemoryStore, StorageKey, TypedStorage};

pub fn classify<T: Storable>() -> ValueKind {
    crate::classify::classify::<T>()
}

pub fn serialize<T: Storable>(value: Option<&T>) -> Result<Option<String>> {
    StorageSerializer::default().serialize(value)
}

pub fn deserialize<T: Storable>(encoded: Option<&str>) -> Result<Option<T>> {
    StorageSerializer::default().deserialize(encoded)
}
