//! Table rendering for `Store::dump_all`
//!
//! ## Layout
//! ```text
//! | name     | type     | value    |
//! | a        | int      | 3        |
//! | greeting | str      | hello    |
//! ```
//!
//! Every cell is left-justified and padded with spaces to at least the
//! column width, measured in bytes. Longer cells are never truncated.
//!
//! The exact output size is computed before anything is written and the
//! buffer is reserved once; a failed reservation is reported as
//! [`KvError::AllocationFailure`].

use std::borrow::Cow;

use crate::error::{KvError, Result};

use super::{Dump, Entry, Value};

const HEADER: [&str; 3] = ["name", "type", "value"];

/// Bytes of framing in one row: "| " + " | " + " | " + " |\n"
const ROW_OVERHEAD: usize = 11;

pub(super) fn render(entries: &[Entry], width: usize) -> Result<Dump> {
    if entries.is_empty() {
        return Ok(Dump::Empty);
    }

    let size = header_len(width)
        .and_then(|header| {
            entries.iter().try_fold(header, |total, entry| {
                total.checked_add(row_len(entry, width)?)
            })
        })
        .ok_or_else(|| {
            tracing::error!(width, "dump size overflows usize");
            KvError::AllocationFailure {
                requested: usize::MAX,
            }
        })?;

    let mut out = String::new();
    out.try_reserve_exact(size).map_err(|_| {
        tracing::error!(requested = size, "failed to reserve dump buffer");
        KvError::AllocationFailure { requested: size }
    })?;

    write_row(&mut out, HEADER, width);
    for entry in entries {
        let value = value_cell(&entry.value);
        write_row(
            &mut out,
            [entry.key.as_str(), entry.value.value_type().as_str(), &*value],
            width,
        );
    }

    debug_assert_eq!(out.len(), size);
    Ok(Dump::Table(out))
}

fn header_len(width: usize) -> Option<usize> {
    HEADER
        .iter()
        .try_fold(ROW_OVERHEAD, |total, cell| total.checked_add(cell.len().max(width)))
}

fn row_len(entry: &Entry, width: usize) -> Option<usize> {
    let value_len = match &entry.value {
        Value::Integer(n) => decimal_len(*n),
        Value::Text(s) => s.len(),
    };

    [
        entry.key.len(),
        entry.value.value_type().as_str().len(),
        value_len,
    ]
    .iter()
    .try_fold(ROW_OVERHEAD, |total, len| total.checked_add((*len).max(width)))
}

fn write_row(out: &mut String, cells: [&str; 3], width: usize) {
    out.push_str("| ");
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str(" | ");
        }
        out.push_str(cell);
        for _ in cell.len()..width {
            out.push(' ');
        }
    }
    out.push_str(" |\n");
}

fn value_cell(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Integer(n) => Cow::Owned(n.to_string()),
        Value::Text(s) => Cow::Borrowed(s),
    }
}

/// Length of `n` printed in decimal, sign included
fn decimal_len(n: i64) -> usize {
    let mut rest = n.unsigned_abs();
    let mut digits = 1;
    while rest >= 10 {
        rest /= 10;
        digits += 1;
    }
    digits + usize::from(n < 0)
}
