//! Session
//!
//! Drives one store from a stream of command lines.

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::{KvError, Result};
use crate::protocol::{parse_command, Command, Reply, Stream, BANNER};
use crate::store::{Dump, Store};

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One line read from the input
enum Line {
    Text(String),
    TooLong,
    Eof,
}

/// An interactive session owning its store
pub struct Session<R, W, E> {
    /// The table this session operates on
    store: Store,

    /// Command source
    input: R,

    /// Values, tables and help
    out: W,

    /// Misses, warnings and usage errors
    err: E,

    /// Longest accepted line, in bytes
    max_line_len: usize,

    show_banner: bool,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    /// Create a session with a fresh store built from `config`
    pub fn new(config: Config, input: R, out: W, err: E) -> Self {
        let max_line_len = config.max_line_len;
        let show_banner = config.show_banner;

        Self {
            store: Store::with_config(config),
            input,
            out,
            err,
            max_line_len,
            show_banner,
        }
    }

    /// Run until `exit` or end of input
    ///
    /// Only I/O errors and dump allocation failures end the session with
    /// an error; every other condition is reported and the loop goes on.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.out.write_all(BANNER.as_bytes())?;
        }

        let mut buf = Vec::new();
        loop {
            self.out.flush()?;

            let line = match self.read_line(&mut buf)? {
                Line::Text(line) => line,
                Line::TooLong => {
                    let error = KvError::CommandTooLong {
                        max: self.max_line_len,
                    };
                    self.write_reply(&Reply::from_error(&error))?;
                    continue;
                }
                Line::Eof => {
                    tracing::debug!("end of input");
                    break;
                }
            };

            if self.handle_line(&line)? == Flow::Exit {
                break;
            }
        }

        self.store.teardown();
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }

    /// Parse and execute one line
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        tracing::trace!(line, "received command line");

        match parse_command(line) {
            Ok(command) => self.execute(command),
            Err(e) => {
                self.write_reply(&Reply::from_error(&e))?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Execute a command and write its reply
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        tracing::debug!(verb = command.verb(), "executing command");

        let result = match command {
            Command::Help => Ok(Some(Reply::help())),
            Command::Clear => Ok(Some(Reply::clear_screen())),
            Command::Set {
                value_type,
                key,
                value,
            } => self
                .store
                .insert(&key, value_type, &value)
                .map(|outcome| outcome.is_duplicate().then(Reply::duplicate_key)),
            Command::Get { key } => self
                .store
                .get(&key)
                .map(|value| Some(Reply::value(value)))
                .ok_or_else(|| KvError::KeyNotFound(key)),
            Command::Delete { key } => self.store.delete(&key).map(|_| None),
            Command::GetAll => self.store.dump_all().map(|dump| {
                Some(match dump {
                    Dump::Empty => Reply::no_data(),
                    Dump::Table(table) => Reply::table(&table),
                })
            }),
            Command::Exit => {
                self.store.teardown();
                return Ok(Flow::Exit);
            }
        };

        match result {
            Ok(Some(reply)) => self.write_reply(&reply)?,
            Ok(None) => {}
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => self.write_reply(&Reply::from_error(&e))?,
        }

        Ok(Flow::Continue)
    }

    /// The session's store
    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    fn write_reply(&mut self, reply: &Reply) -> Result<()> {
        match reply.stream {
            Stream::Out => self.out.write_all(reply.text.as_bytes())?,
            Stream::Err => {
                // Keep stdout ordered ahead of the diagnostic
                self.out.flush()?;
                self.err.write_all(reply.text.as_bytes())?;
                self.err.flush()?;
            }
        }
        Ok(())
    }

    /// Read one line, at most `max_line_len` bytes before the line ending
    ///
    /// Neither `\n` nor `\r\n` counts toward the limit.
    fn read_line(&mut self, buf: &mut Vec<u8>) -> Result<Line> {
        buf.clear();

        let limit = (self.max_line_len as u64).saturating_add(2);
        let read = (&mut self.input).take(limit).read_until(b'\n', buf)?;
        if read == 0 {
            return Ok(Line::Eof);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        } else if read as u64 == limit {
            self.skip_rest_of_line()?;
            return Ok(Line::TooLong);
        }

        if buf.len() > self.max_line_len {
            return Ok(Line::TooLong);
        }

        Ok(Line::Text(String::from_utf8_lossy(buf).into_owned()))
    }

    fn skip_rest_of_line(&mut self) -> Result<()> {
        loop {
            let available = self.input.fill_buf()?;
            if available.is_empty() {
                return Ok(());
            }

            match available.iter().position(|&b| b == b'\n') {
                Some(i) => {
                    self.input.consume(i + 1);
                    return Ok(());
                }
                None => {
                    let len = available.len();
                    self.input.consume(len);
                }
            }
        }
    }
}

/// Open a script file as session input
pub fn open_script(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)?;
    tracing::debug!("Reading commands from {}", path.display());
    Ok(BufReader::new(file))
}
