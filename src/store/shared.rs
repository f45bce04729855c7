//! Thread-safe handle to a Store
//!
//! The store itself is single-threaded. Hosts that need to reach one store
//! from several threads go through this handle, which serializes every call
//! behind a `parking_lot::Mutex`.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::Config;
use crate::error::Result;

use super::{Dump, Entry, InsertOutcome, Store, Value, ValueType};

/// Cloneable, mutex-guarded handle to one [`Store`]
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    /// Wrap an existing store
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Create a shared empty store with the limits in `config`
    pub fn with_config(config: Config) -> Self {
        Self::new(Store::with_config(config))
    }

    pub fn insert(&self, key: &str, value_type: ValueType, raw: &str) -> Result<InsertOutcome> {
        self.inner.lock().insert(key, value_type, raw)
    }

    pub fn insert_value(&self, key: &str, value: Value) -> Result<InsertOutcome> {
        self.inner.lock().insert_value(key, value)
    }

    /// Look up `key`, cloning the value out of the lock
    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner.lock().get(key).cloned()
    }

    pub fn delete(&self, key: &str) -> Result<Entry> {
        self.inner.lock().delete(key)
    }

    pub fn dump_all(&self) -> Result<Dump> {
        self.inner.lock().dump_all()
    }

    pub fn teardown(&self) {
        self.inner.lock().teardown()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Run `f` with exclusive access to the store
    pub fn with<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
