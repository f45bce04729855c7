//! memkv Shell Binary
//!
//! Runs an interactive memkv session on stdin, or replays a script file.

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use memkv::config::{self, Config};
use memkv::shell::{open_script, Session};
use memkv::{KvError, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// memkv shell
#[derive(Parser, Debug)]
#[command(name = "memkv")]
#[command(about = "In-memory typed key-value store with an interactive shell")]
#[command(version)]
struct Args {
    /// Maximum number of entries
    #[arg(short = 'n', long, default_value_t = config::MAX_ENTRIES)]
    max_entries: usize,

    /// Maximum key length in bytes
    #[arg(long, default_value_t = config::MAX_KEY_LEN)]
    max_key_len: usize,

    /// Maximum value length in bytes
    #[arg(long, default_value_t = config::MAX_VALUE_LEN)]
    max_value_len: usize,

    /// Maximum command line length in bytes
    #[arg(long, default_value_t = config::MAX_LINE_LEN)]
    max_line_len: usize,

    /// Minimum width of each column in `aget` output
    #[arg(short = 'w', long, default_value_t = config::COLUMN_WIDTH)]
    column_width: usize,

    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Do not print the greeting banner
    #[arg(long)]
    no_banner: bool,
}

fn main() {
    // Logs go to stderr so they never mix with command output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("memkv v{}", memkv::VERSION);

    let config = Config::builder()
        .max_entries(args.max_entries)
        .max_key_len(args.max_key_len)
        .max_value_len(args.max_value_len)
        .max_line_len(args.max_line_len)
        .column_width(args.column_width)
        .show_banner(!args.no_banner)
        .build();

    let result = match &args.script {
        Some(path) => open_script(path).and_then(|input| run(config, input)),
        None => run(config, io::stdin().lock()),
    };

    if let Err(e) = result {
        match &e {
            KvError::AllocationFailure { requested } => {
                tracing::error!(requested, "Out of memory while formatting table");
            }
            _ => tracing::error!("Session failed: {}", e),
        }
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run<R: BufRead>(config: Config, input: R) -> Result<()> {
    let mut session = Session::new(config, input, io::stdout().lock(), io::stderr());
    session.run()
}
