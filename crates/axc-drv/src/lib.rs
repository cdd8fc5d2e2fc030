//! axc-drv - Driver for the Axon expression lexer.
//!
//! Orchestration glue around the `axc-lex` scanner: parse arguments, pull
//! tokens until end of input, print the token trace, report diagnostics.
//! Any consumer that pulls tokens one at a time can replace this loop.

use std::env;
use std::io;

use anyhow::Result;

use axc_lex::{Lexer, TokenKind, TraceWriter};
use axc_util::Handler;

/// The demo line scanned when no input is given on the command line.
pub const DEMO_INPUT: &str = "G(8%2)-3";

/// Configuration for a driver run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The expression to scan; `None` falls back to [`DEMO_INPUT`].
    pub input: Option<String>,
    /// Print help and exit.
    pub help: bool,
    /// Print version and exit.
    pub version: bool,
}

/// Parse command line arguments from the process environment.
pub fn parse_args() -> Result<Config, String> {
    parse_args_from(env::args().skip(1))
}

/// Parse command line arguments from an explicit iterator.
///
/// Positional arguments are joined with single spaces into one input
/// expression, so `axc x1 = 42` and `axc "x1 = 42"` scan the same text.
/// A `--` separator ends option parsing, so expressions starting with a
/// minus are scannable: `axc -- -3+2`.
pub fn parse_args_from(args: impl Iterator<Item = String>) -> Result<Config, String> {
    let mut config = Config::default();
    let mut words: Vec<String> = Vec::new();
    let mut options_done = false;

    for arg in args {
        if options_done {
            words.push(arg);
        } else if arg == "--" {
            options_done = true;
        } else if arg == "--help" || arg == "-h" {
            config.help = true;
            return Ok(config);
        } else if arg == "--version" || arg == "-V" {
            config.version = true;
            return Ok(config);
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(format!("Unknown option: {} (use -- before expressions starting with -)", arg));
        } else {
            words.push(arg);
        }
    }

    if !words.is_empty() {
        config.input = Some(words.join(" "));
    }

    Ok(config)
}

/// Print help message.
pub fn print_help() {
    println!("Axon expression lexer v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: axc [OPTIONS] [expression]");
    println!();
    println!("Scans the expression and prints one trace line per token.");
    println!("With no expression, scans the demo line {:?}.", DEMO_INPUT);
    println!();
    println!("Options:");
    println!("  -h, --help           Print this help message");
    println!("  -V, --version        Print version information");
    println!("  --                   End of options; scan the rest verbatim");
}

/// Run the driver loop for the given configuration.
///
/// Pulls tokens until `Eof`, tracing each one (the `Eof` token included)
/// to stdout, then reports collected diagnostics to stderr.
pub fn run(config: &Config) -> Result<()> {
    if config.help {
        print_help();
        return Ok(());
    }
    if config.version {
        println!("axc {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let source = config.input.as_deref().unwrap_or(DEMO_INPUT);
    let handler = Handler::new();

    scan(source, &handler, io::stdout().lock());

    for diag in handler.diagnostics() {
        match diag.code {
            Some(code) => eprintln!("{} [{}]: {}", diag.level, code, diag.message),
            None => eprintln!("{}: {}", diag.level, diag.message),
        }
    }
    handler.ensure_clean()?;
    Ok(())
}

/// Scan one input, writing the token trace to the given sink.
///
/// The trace is best-effort output; a failed write never aborts the scan.
fn scan(source: &str, handler: &Handler, out: impl io::Write) {
    let mut trace = TraceWriter::new(out);
    let mut lexer = Lexer::new(source, handler).with_observer(&mut trace);
    loop {
        if lexer.next_token().kind == TokenKind::Eof {
            break;
        }
    }
}
