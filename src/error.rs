//! Error types for memkv
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using KvError
pub type Result<T> = std::result::Result<T, KvError>;

/// Unified error type for memkv operations
#[derive(Debug, Error)]
pub enum KvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage is full. Cannot insert more data.")]
    CapacityExceeded { capacity: usize },

    #[error("Key '{0}' not found in the storage.")]
    KeyNotFound(String),

    #[error("Key must not be empty.")]
    EmptyKey,

    #[error("Key is too long ({len} bytes, max {max}).")]
    KeyTooLong { len: usize, max: usize },

    #[error("Value is too long ({len} bytes, max {max}).")]
    ValueTooLong { len: usize, max: usize },

    /// Fatal: the dump buffer could not be reserved
    #[error("Memory allocation error.")]
    AllocationFailure { requested: usize },

    // -------------------------------------------------------------------------
    // Command Errors
    // -------------------------------------------------------------------------
    #[error("Invalid command")]
    InvalidCommand,

    #[error("Command is too long")]
    CommandTooLong { max: usize },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid data type. Use 'int' or 'str'.")]
    InvalidType(String),

    #[error("Invalid {verb} command. Usage: {usage}")]
    Usage {
        verb: &'static str,
        usage: &'static str,
    },
}

impl KvError {
    /// Whether the session must stop after this error
    pub fn is_fatal(&self) -> bool {
        matches!(self, KvError::Io(_) | KvError::AllocationFailure { .. })
    }
}
