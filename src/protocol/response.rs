//! Reply definitions
//!
//! The user-facing text produced for each result or condition, and the
//! stream it belongs on.

use crate::error::KvError;
use crate::store::Value;

/// Printed once when a session starts
pub const BANNER: &str = "\
----------------------------------------------------
To see all possible command use 'help' command
----------------------------------------------------

";

/// Command reference printed by `help`
pub const HELP_TEXT: &str = "\
Command Format:
  > set {!type} {!key} {!value} - Insert data.
  > get {!key} - Retrieves data using the specified key.
  > delete {!key} - Removes data using the specified key.
  > aget - Prints all stored data as a table.
  > clear, c - Clears the screen.
  > exit - Exits the program.

Command Components:
  {!type} - Type of data (int or str).
  {!key}  - Unique identifier for the data.
  {!value} - Value associated with the key.

Note:
  ! - Indicates that the argument is required.
";

/// Cursor home + erase display
pub const CLEAR_SCREEN: &str = "\x1b[1;1H\x1b[2J";

/// Output stream a reply is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Out,
    Err,
}

/// A reply to write back to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Destination stream
    pub stream: Stream,

    /// Exact text, newline included
    pub text: String,
}

impl Reply {
    /// Create a reply for standard output
    pub fn out(text: impl Into<String>) -> Self {
        Self {
            stream: Stream::Out,
            text: text.into(),
        }
    }

    /// Create a reply for standard error
    pub fn err(text: impl Into<String>) -> Self {
        Self {
            stream: Stream::Err,
            text: text.into(),
        }
    }

    /// A looked-up value
    pub fn value(value: &Value) -> Self {
        Self::out(format!("{}\n", value))
    }

    pub fn duplicate_key() -> Self {
        Self::err("Key already exists in database.\n")
    }

    /// A rendered dump, followed by a blank line
    pub fn table(table: &str) -> Self {
        Self::out(format!("{}\n", table))
    }

    pub fn no_data() -> Self {
        Self::out("No data available.\n")
    }

    pub fn help() -> Self {
        Self::out(HELP_TEXT)
    }

    pub fn clear_screen() -> Self {
        Self::out(CLEAR_SCREEN)
    }

    /// Report a non-fatal error
    ///
    /// Unknown verbs go to standard output, everything else to standard
    /// error.
    pub fn from_error(error: &KvError) -> Self {
        match error {
            KvError::UnknownCommand(_) => Self::out(format!("{}\n", error)),
            _ => Self::err(format!("{}\n", error)),
        }
    }
}
