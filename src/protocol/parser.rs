//! Command line parser
//!
//! Turns one line of input into a [`Command`].
//!
//! ## Grammar
//! ```text
//! help | clear | c | aget | exit
//! set <int|str> <key> <value...>
//! get <key...>
//! delete <key...>
//! ```
//!
//! Tokens are separated by single spaces; runs of spaces before the verb,
//! the type and the key are skipped. The last argument of `set`, `get` and
//! `delete` is the rest of the line after the separating space, so it may
//! itself contain spaces.

use crate::error::{KvError, Result};

use super::Command;

pub const SET_USAGE: &str = "set {!type} {!key} {!value}";
pub const GET_USAGE: &str = "get {!key}";
pub const DELETE_USAGE: &str = "delete {!key}";

/// Parse one line (without its trailing newline)
pub fn parse_command(line: &str) -> Result<Command> {
    let (verb, rest) = next_token(line).ok_or(KvError::InvalidCommand)?;

    match verb {
        "help" => Ok(Command::Help),
        "clear" | "c" => Ok(Command::Clear),
        "aget" => Ok(Command::GetAll),
        "exit" => Ok(Command::Exit),
        "set" => parse_set(rest),
        "get" => Ok(Command::Get {
            key: remainder(rest, "get", GET_USAGE)?,
        }),
        "delete" => Ok(Command::Delete {
            key: remainder(rest, "delete", DELETE_USAGE)?,
        }),
        other => Err(KvError::UnknownCommand(other.to_string())),
    }
}

fn parse_set(rest: &str) -> Result<Command> {
    let usage = || KvError::Usage {
        verb: "set",
        usage: SET_USAGE,
    };

    let (value_type, rest) = next_token(rest).ok_or_else(usage)?;
    let (key, rest) = next_token(rest).ok_or_else(usage)?;
    if rest.is_empty() {
        return Err(usage());
    }

    Ok(Command::Set {
        value_type: value_type.parse()?,
        key: key.to_string(),
        value: rest.to_string(),
    })
}

/// Split off the next space-delimited token, skipping leading spaces
///
/// The returned remainder starts just after the single delimiting space.
fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start_matches(' ');
    if s.is_empty() {
        return None;
    }

    Some(s.split_once(' ').unwrap_or((s, "")))
}

fn remainder(rest: &str, verb: &'static str, usage: &'static str) -> Result<String> {
    if rest.is_empty() {
        return Err(KvError::Usage { verb, usage });
    }
    Ok(rest.to_string())
}
