//! Protocol Module
//!
//! Defines the line-oriented command language of the shell.
//!
//! ## Commands
//! - `set <type> <key> <value>` - insert a typed value
//! - `get <key>`                - print a value
//! - `delete <key>`             - remove an entry
//! - `aget`                     - print every entry as a table
//! - `help`, `clear` / `c`, `exit`
//!
//! ## Replies
//! Values, tables, help and unknown-command notices go to standard output.
//! Misses, warnings and usage errors go to standard error.

mod command;
mod parser;
mod response;

pub use command::Command;
pub use parser::{parse_command, DELETE_USAGE, GET_USAGE, SET_USAGE};
pub use response::{Reply, Stream, BANNER, CLEAR_SCREEN, HELP_TEXT};
