//! Shell Module
//!
//! Interactive read-eval-print loop around one [`Store`](crate::store::Store).
//!
//! ## Responsibilities
//! - Read bounded command lines from any `BufRead`
//! - Parse and execute them against the session's store
//! - Write values and tables to the output writer, diagnostics to the
//!   error writer
//! - Tear the store down on `exit` or end of input

mod session;

pub use session::{open_script, Flow, Session};
