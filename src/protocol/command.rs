//! Command definitions
//!
//! Represents one parsed line of the interactive shell.

use crate::store::ValueType;

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the command reference
    Help,

    /// Clear the terminal
    Clear,

    /// Insert a typed value
    Set {
        value_type: ValueType,
        key: String,
        value: String,
    },

    /// Look up a value by key
    Get { key: String },

    /// Delete the first entry with key
    Delete { key: String },

    /// Dump the whole table
    GetAll,

    /// Tear down the store and end the session
    Exit,
}

impl Command {
    /// The verb as typed on the command line
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Clear => "clear",
            Command::Set { .. } => "set",
            Command::Get { .. } => "get",
            Command::Delete { .. } => "delete",
            Command::GetAll => "aget",
            Command::Exit => "exit",
        }
    }
}
