//! wafreport CLI — summarize ModSecurity / OWASP CRS anomaly score totals.
//!
//! Reads one `INBOUND OUTBOUND` score pair per line from stdin and prints the
//! inbound and outbound tables to stdout. Typical use:
//!
//! ```text
//! grep -E -o "[0-9-]+ [0-9-]+$" my_waf.log | wafreport
//! ```
//!
//! Diagnostics go to stderr through `tracing`; stdout carries only the report.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use wafreport_core::Accumulator;
use wafreport_report::format_report;

#[derive(Parser, Debug)]
#[command(
    name = "wafreport",
    version,
    about = "wafreport — inbound/outbound anomaly score statistics from stdin",
    long_about = None
)]
struct Cli {
    /// Log more to stderr (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Accepted for compatibility and ignored; input is always stdin.
    #[arg(hide = true)]
    ignored: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if !cli.ignored.is_empty() {
        warn!(args = ?cli.ignored, "ignoring arguments; scores are read from stdin");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Consume `input` to the end, then write the report to `output`.
///
/// A failing input stream is logged and the report covers whatever was read
/// before the failure. Only a failing output stream is an error.
fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<()> {
    let mut acc = Accumulator::new();
    match acc.read_from(input) {
        Ok(lines) => info!(lines, "input exhausted"),
        Err(e) => error!("{e}; reporting on the lines read so far"),
    }
    let aggregate = acc.finish();
    info!(records = aggregate.total, "writing report");

    output
        .write_all(format_report(&aggregate).as_bytes())
        .and_then(|()| output.flush())
        .context("failed to write report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run_to_string(input: &str) -> String {
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_arguments_are_accepted_and_ignored() {
        let cli = Cli::try_parse_from(["wafreport", "somefile", "other"]).unwrap();
        assert_eq!(cli.ignored, vec!["somefile", "other"]);
        assert_eq!(cli.verbose, 0);

        let cli = Cli::try_parse_from(["wafreport", "-vv", "somefile"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.ignored, vec!["somefile"]);
    }

    #[test]
    fn stdin_scores_become_report() {
        let text = run_to_string("5 0\n5 -\n- 3\n");
        assert!(text.starts_with("Inbound (Requests)\n"));
        assert!(text.contains("Outbound (Responses)\n"));
        assert!(text.contains("Total number of requests | 3 |"));
        assert!(text.contains("Requests with inbound score of 5 | 2 |"));
        assert!(text.contains("Responses with outbound score of 3 | 1 |"));
    }

    #[test]
    fn empty_stdin_still_succeeds() {
        let text = run_to_string("");
        assert!(text.contains(wafreport_report::NO_DATA_NOTICE));
    }

    #[test]
    fn garbage_stdin_still_succeeds() {
        let text = run_to_string("hello\nworld\n");
        assert!(text.contains("Total number of requests | 0 |"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn output_failure_is_reported() {
        let err = run("1 1\n".as_bytes(), BrokenPipe).unwrap_err();
        assert!(err.to_string().contains("failed to write report"));
    }
}
