//! # memkv
//!
//! A small in-memory key-value store with:
//! - Typed values (integer, string)
//! - A fixed-capacity entry table with swap-compacting deletes
//! - A fixed-width table dump of every entry
//! - A line-oriented interactive shell
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     memkv binary (clap)                      │
//! │                  stdin / script file input                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Shell Session                            │
//! │         (read line → parse → execute → reply)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌───────────────┐        ┌─────────────┐
//!   │   Protocol    │        │    Store    │
//!   │(Command/Reply)│        │ (Vec<Entry>)│
//!   └───────────────┘        └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod protocol;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::Config;
pub use store::{Dump, Entry, InsertOutcome, SharedStore, Store, Value, ValueType};
pub use shell::Session;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of memkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
