//! Session Tests
//!
//! Tests verify:
//! - Transcripts reproduce the shell's messages on the right streams
//! - exit and end of input tear the store down
//! - Line length bound
//! - Script files as input

use std::io::Write;

use memkv::config::Config;
use memkv::protocol::{Command, BANNER, CLEAR_SCREEN};
use memkv::shell::{open_script, Flow, Session};
use memkv::{KvError, Value, ValueType};
use tempfile::NamedTempFile;

// =============================================================================
// Helper Functions
// =============================================================================

fn quiet_config() -> Config {
    Config::builder().show_banner(false).build()
}

/// Run `input` through a fresh session, returning (stdout, stderr)
fn run_with(config: Config, input: &str) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();

    Session::new(config, input.as_bytes(), &mut out, &mut err)
        .run()
        .unwrap();

    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn run(input: &str) -> (String, String) {
    run_with(quiet_config(), input)
}

// =============================================================================
// Transcript Tests
// =============================================================================

#[test]
fn test_banner_printed_by_default() {
    let (out, _) = run_with(Config::default(), "");
    assert_eq!(out, BANNER);
}

#[test]
fn test_set_then_get() {
    let (out, err) = run("set int a 3\nset str b hello\nget a\nget b\n");

    assert_eq!(out, "3\nhello\n");
    assert_eq!(err, "");
}

#[test]
fn test_scenario_delete_then_miss() {
    let (out, err) = run("set int a 3\nset str b hello\ndelete a\nget a\nget b\n");

    assert_eq!(out, "hello\n");
    assert_eq!(err, "Key 'a' not found in the storage.\n");
}

#[test]
fn test_best_effort_integer() {
    let (out, _) = run("set int x notanumber\nget x\n");
    assert_eq!(out, "0\n");
}

#[test]
fn test_duplicate_key_warns_and_inserts() {
    let (out, err) = run("set int k 1\nset int k 2\naget\n");

    assert_eq!(err, "Key already exists in database.\n");
    assert_eq!(
        out,
        "\
| name     | type     | value    |
| k        | int      | 1        |
| k        | int      | 2        |

"
    );
}

#[test]
fn test_aget_empty() {
    let (out, _) = run("aget\n");
    assert_eq!(out, "No data available.\n");
}

#[test]
fn test_delete_missing_key() {
    let (out, err) = run("delete nope\n");

    assert_eq!(out, "");
    assert_eq!(err, "Key 'nope' not found in the storage.\n");
}

#[test]
fn test_storage_full() {
    let config = Config::builder().show_banner(false).max_entries(1).build();
    let (out, err) = run_with(config, "set int a 1\nset int b 2\nget b\n");

    assert_eq!(out, "");
    assert_eq!(
        err,
        "Storage is full. Cannot insert more data.\nKey 'b' not found in the storage.\n"
    );
}

#[test]
fn test_usage_and_parse_errors() {
    let (out, err) = run("set int a\nget\ndelete\nset bool a 1\n\nfoo bar\n");

    assert_eq!(out, "Unknown command: foo\n");
    assert_eq!(
        err,
        "\
Invalid set command. Usage: set {!type} {!key} {!value}
Invalid get command. Usage: get {!key}
Invalid delete command. Usage: delete {!key}
Invalid data type. Use 'int' or 'str'.
Invalid command
"
    );
}

#[test]
fn test_oversize_key_reported() {
    let config = Config::builder().show_banner(false).max_key_len(3).build();
    let (_, err) = run_with(config, "set int abcd 1\n");

    assert_eq!(err, "Key is too long (4 bytes, max 3).\n");
}

#[test]
fn test_help_and_clear() {
    let (out, _) = run("help\nc\n");

    assert!(out.starts_with("Command Format:\n"));
    assert!(out.ends_with(CLEAR_SCREEN));
}

#[test]
fn test_crlf_line_endings() {
    let (out, _) = run("set str k v\r\nget k\r\n");
    assert_eq!(out, "v\n");
}

#[test]
fn test_last_line_without_newline() {
    let (out, _) = run("set int a 7\nget a");
    assert_eq!(out, "7\n");
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

#[test]
fn test_exit_stops_reading() {
    let (out, _) = run("set int a 1\nexit\nget a\n");
    assert_eq!(out, "");
}

#[test]
fn test_run_tears_down_store() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut session = Session::new(quiet_config(), "set int a 1\n".as_bytes(), &mut out, &mut err);

    session.run().unwrap();

    assert!(session.store().is_empty());
}

#[test]
fn test_execute_directly() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut session = Session::new(quiet_config(), "".as_bytes(), &mut out, &mut err);

    let flow = session
        .execute(Command::Set {
            value_type: ValueType::Text,
            key: "k".to_string(),
            value: "v".to_string(),
        })
        .unwrap();
    assert_eq!(flow, Flow::Continue);
    assert_eq!(session.store().get("k"), Some(&Value::from("v")));

    assert_eq!(session.handle_line("exit").unwrap(), Flow::Exit);
    assert!(session.store().is_empty());
}

// =============================================================================
// Line Length Tests
// =============================================================================

#[test]
fn test_line_too_long_is_discarded() {
    let config = Config::builder().show_banner(false).max_line_len(12).build();
    let long = format!("set str k {}\nget k\nset int a 1\nget a\n", "x".repeat(40));

    let (out, err) = run_with(config, &long);

    assert_eq!(out, "1\n");
    assert_eq!(
        err,
        "Command is too long\nKey 'k' not found in the storage.\n"
    );
}

#[test]
fn test_line_at_limit_accepted() {
    let config = Config::builder().show_banner(false).max_line_len(11).build();
    let (out, err) = run_with(config, "set int a 1\nget a\n");

    assert_eq!(out, "1\n");
    assert_eq!(err, "");
}

#[test]
fn test_crlf_line_at_limit_accepted() {
    let config = Config::builder().show_banner(false).max_line_len(11).build();
    let (out, err) = run_with(config, "set int a 1\r\nget a\r\n");

    assert_eq!(out, "1\n");
    assert_eq!(err, "");
}

#[test]
fn test_one_byte_over_limit_rejected() {
    let config = Config::builder().show_banner(false).max_line_len(10).build();
    let (out, err) = run_with(config, "set int a 1\nset int a 1\r\nget a\n");

    assert_eq!(out, "");
    assert_eq!(
        err,
        "Command is too long\nCommand is too long\nKey 'a' not found in the storage.\n"
    );
}

#[test]
fn test_unbounded_line_length() {
    let config = Config::builder()
        .show_banner(false)
        .max_line_len(usize::MAX)
        .build();
    let (out, err) = run_with(config, "set int a 1\nget a\n");

    assert_eq!(out, "1\n");
    assert_eq!(err, "");
}

// =============================================================================
// Fatal Error Tests
// =============================================================================

#[test]
fn test_allocation_failure_ends_session() {
    let config = Config::builder()
        .show_banner(false)
        .column_width(usize::MAX / 4)
        .build();
    let mut out = Vec::new();
    let mut err = Vec::new();

    let input = "set int a 1\naget\nget a\n";

    let result = Session::new(config, input.as_bytes(), &mut out, &mut err).run();

    assert!(matches!(result, Err(KvError::AllocationFailure { .. })));
    assert!(out.is_empty());
    assert!(err.is_empty());
}

// =============================================================================
// Script Tests
// =============================================================================

#[test]
fn test_script_file_input() {
    let mut script = NamedTempFile::new().unwrap();
    writeln!(script, "set int a 41").unwrap();
    writeln!(script, "set str b from a file").unwrap();
    writeln!(script, "get b").unwrap();
    writeln!(script, "aget").unwrap();
    script.flush().unwrap();

    let input = open_script(script.path()).unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();
    Session::new(quiet_config(), input, &mut out, &mut err)
        .run()
        .unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("from a file\n| name     | type     | value    |\n"));
    assert!(out.contains("| a        | int      | 41       |\n"));
    assert!(out.contains("| b        | str      | from a file |\n"));
}

#[test]
fn test_missing_script_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = open_script(&dir.path().join("missing.txt"));

    assert!(matches!(result, Err(KvError::Io(_))));
}
