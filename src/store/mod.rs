//! Store Module
//!
//! Fixed-capacity in-memory table of typed key-value entries.
//!
//! ## Responsibilities
//! - Insert, point lookup, delete and full-table dump
//! - Enforce the capacity bound and key/value length bounds
//! - Warn (but do not refuse) on duplicate keys
//! - Keep the table packed after deletion
//!
//! ## Data Structure Choice
//! A plain `Vec<Entry>` scanned linearly:
//! - Insertion appends, so storage order is insertion order
//! - Deletion uses `swap_remove`: the last entry moves into the freed slot,
//!   O(1) after the scan, but the order of the remaining entries changes
//! - Lookups return the first match, which matters once duplicates exist

mod dump;
mod shared;
mod table;

pub use shared::SharedStore;
pub use table::Store;

use std::fmt;
use std::str::FromStr;

use crate::error::KvError;

/// Type tag of a stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Signed integer, written `int` on the command line
    Integer,

    /// Verbatim text, written `str` on the command line
    Text,
}

impl ValueType {
    /// Name used on the command line and in the dump's `type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Integer => "int",
            ValueType::Text => "str",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = KvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(ValueType::Integer),
            "str" => Ok(ValueType::Text),
            other => Err(KvError::InvalidType(other.to_string())),
        }
    }
}

/// A stored value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Text(String),
}

impl Value {
    /// Build a value of the given type from raw command-line text
    ///
    /// Integers use [`parse_int_lossy`]; text is kept verbatim.
    pub fn parse(value_type: ValueType, raw: &str) -> Self {
        match value_type {
            ValueType::Integer => Value::Integer(parse_int_lossy(raw)),
            ValueType::Text => Value::Text(raw.to_string()),
        }
    }

    /// The tag of this value
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Integer(_) => ValueType::Integer,
            Value::Text(_) => ValueType::Text,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Integer(_) => None,
            Value::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// One stored key/value pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: Value,
}

/// Successful result of an insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was not present before
    Inserted,

    /// The key already existed; a second entry was appended anyway
    DuplicateKey,
}

impl InsertOutcome {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, InsertOutcome::DuplicateKey)
    }
}

/// Result of dumping the whole table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dump {
    /// The table holds no entries
    Empty,

    /// Rendered table, one `\n`-terminated line per row
    Table(String),
}

/// Best-effort integer parse
///
/// Skips leading whitespace, accepts one optional sign, then reads the
/// longest run of ASCII digits. Input without leading digits yields `0`,
/// trailing garbage is ignored, and out-of-range values saturate.
pub fn parse_int_lossy(raw: &str) -> i64 {
    let s = raw.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            let digit = i64::from(b - b'0');
            if negative {
                acc.saturating_mul(10).saturating_sub(digit)
            } else {
                acc.saturating_mul(10).saturating_add(digit)
            }
        })
}
