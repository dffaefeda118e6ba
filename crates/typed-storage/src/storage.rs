//! String key-value stores and a typed view over them.

use core::fmt;
use core::marker::PhantomData;
use std::collections::BTreeMap;

use tracing::debug;

use crate::codec::StorageSerializer;
use crate::descriptor::Storable;
use crate::error::{Error, Result};

/// A store holding only strings, shaped after the Web Storage API.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&mut self, key: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
    fn len(&self) -> Result<usize>;
    /// Name of the `index`-th key, `None` past the end.
    fn key(&self, index: usize) -> Result<Option<String>>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// All key names, in `key(index)` order.
    fn keys(&self) -> Result<Vec<String>> {
        let len = self.len()?;
        let mut keys = Vec::with_capacity(len);
        for index in 0..len {
            if let Some(key) = self.key(index)? {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.items.clear();
        Ok(())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.items.len())
    }

    fn key(&self, index: usize) -> Result<Option<String>> {
        Ok(self.items.keys().nth(index).cloned())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.items.keys().cloned().collect())
    }
}

/// A named slot holding values of type `T`.
pub struct StorageKey<T> {
    name: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> StorageKey<T> {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidArgument("storage key name must not be empty".into()));
        }
        Ok(Self {
            name,
            _marker: PhantomData,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> Clone for StorageKey<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for StorageKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageKey")
            .field("name", &self.name)
            .field("type", &core::any::type_name::<T>())
            .finish()
    }
}

impl<T> PartialEq for StorageKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for StorageKey<T> {}

/// Typed access to a string store.
///
/// Putting `None` removes the entry: the store has no other way to hold
/// "no value", while an empty string is an ordinary stored value.
#[derive(Debug)]
pub struct TypedStorage<S> {
    store: S,
    serializer: StorageSerializer,
}

impl<S: KeyValueStore> TypedStorage<S> {
    pub fn new(store: S) -> Self {
        Self::with_serializer(store, StorageSerializer::default())
    }

    pub fn with_serializer(store: S, serializer: StorageSerializer) -> Self {
        Self { store, serializer }
    }

    pub fn put<T: Storable>(&mut self, key: &StorageKey<T>, value: Option<&T>) -> Result<()> {
        match self.serializer.serialize(value)? {
            Some(encoded) => self.store.set_item(key.name(), &encoded),
            None => {
                debug!(key = key.name(), "absent value, removing entry");
                self.store.remove_item(key.name())
            }
        }
    }

    pub fn get<T: Storable>(&self, key: &StorageKey<T>) -> Result<Option<T>> {
        let encoded = self.store.get_item(key.name())?;
        self.serializer.deserialize(encoded.as_deref())
    }

    pub fn remove<T>(&mut self, key: &StorageKey<T>) -> Result<()> {
        self.store.remove_item(key.name())
    }

    pub fn contains_key<T>(&self, key: &StorageKey<T>) -> Result<bool> {
        Ok(self.store.get_item(key.name())?.is_some())
    }

    pub fn keys(&self) -> Result<Vec<String>> {
        self.store.keys()
    }

    pub fn len(&self) -> Result<usize> {
        self.store.len()
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.store.is_empty()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.clear()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn serializer(&self) -> &StorageSerializer {
        &self.serializer
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
