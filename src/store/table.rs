//! Store implementation
//!
//! Vec-backed entry table with linear-scan lookup and swap-compaction.

use crate::config::Config;
use crate::error::{KvError, Result};

use super::dump;
use super::{Dump, Entry, InsertOutcome, Value, ValueType};

/// Fixed-capacity table of typed entries
///
/// Single-threaded by contract: every operation runs to completion and
/// failed operations leave the table untouched. Wrap it in a
/// [`SharedStore`](super::SharedStore) to share it between threads.
#[derive(Debug, Clone)]
pub struct Store {
    /// Live entries in storage order
    entries: Vec<Entry>,

    /// Capacity, length bounds and dump layout
    config: Config,
}

impl Store {
    /// Create an empty store with default limits
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty store with the limits in `config`
    pub fn with_config(config: Config) -> Self {
        Self {
            entries: Vec::new(),
            config,
        }
    }

    /// Insert a value parsed from raw text
    ///
    /// Checks, in order: capacity, key, value length. An existing key is
    /// reported as [`InsertOutcome::DuplicateKey`] but the new entry is
    /// still appended.
    pub fn insert(&mut self, key: &str, value_type: ValueType, raw: &str) -> Result<InsertOutcome> {
        self.ensure_room()?;
        self.check_key(key)?;
        self.check_value_len(raw.len())?;

        Ok(self.push(key, Value::parse(value_type, raw)))
    }

    /// Insert an already-typed value
    pub fn insert_value(&mut self, key: &str, value: Value) -> Result<InsertOutcome> {
        self.ensure_room()?;
        self.check_key(key)?;
        if let Value::Text(text) = &value {
            self.check_value_len(text.len())?;
        }

        Ok(self.push(key, value))
    }

    /// Look up the first entry with `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Check whether any entry has `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Remove the first entry with `key` and return it
    ///
    /// The last entry is moved into the freed slot, so the order of the
    /// remaining entries is not preserved.
    pub fn delete(&mut self, key: &str) -> Result<Entry> {
        let index = self
            .position(key)
            .ok_or_else(|| KvError::KeyNotFound(key.to_string()))?;

        let removed = self.entries.swap_remove(index);
        tracing::debug!(key, index, remaining = self.entries.len(), "deleted entry");

        Ok(removed)
    }

    /// Render every entry as a fixed-width table
    pub fn dump_all(&self) -> Result<Dump> {
        dump::render(&self.entries, self.config.column_width)
    }

    /// Drop all entries; the store stays usable
    pub fn teardown(&mut self) {
        if !self.entries.is_empty() {
            tracing::debug!(released = self.entries.len(), "tearing down store");
        }
        self.entries.clear();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.config.max_entries
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.config.max_entries
    }

    /// Iterate over entries in storage order
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    fn ensure_room(&self) -> Result<()> {
        if self.is_full() {
            tracing::warn!(capacity = self.config.max_entries, "store is full");
            return Err(KvError::CapacityExceeded {
                capacity: self.config.max_entries,
            });
        }
        Ok(())
    }

    fn check_key(&self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(KvError::EmptyKey);
        }
        if key.len() > self.config.max_key_len {
            return Err(KvError::KeyTooLong {
                len: key.len(),
                max: self.config.max_key_len,
            });
        }
        Ok(())
    }

    fn check_value_len(&self, len: usize) -> Result<()> {
        if len > self.config.max_value_len {
            return Err(KvError::ValueTooLong {
                len,
                max: self.config.max_value_len,
            });
        }
        Ok(())
    }

    fn push(&mut self, key: &str, value: Value) -> InsertOutcome {
        let outcome = if self.contains_key(key) {
            tracing::warn!(key, "key already exists, inserting duplicate");
            InsertOutcome::DuplicateKey
        } else {
            InsertOutcome::Inserted
        };

        tracing::debug!(key, value_type = %value.value_type(), "inserted entry");
        self.entries.push(Entry {
            key: key.to_string(),
            value,
        });

        outcome
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
