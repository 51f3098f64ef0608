//! `phishguard interactive` – line-oriented analysis loop on stdin.

use anyhow::{Context, Result};
use phishguard_core::config::PhishguardConfig;
use phishguard_core::predictor::{HttpPredictor, Predictor};
use phishguard_core::report::render::{render_failure, render_report};
use phishguard_core::session::AnalysisSession;
use std::io::{self, BufRead, Write};

/// What a line of input asks for.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LineCommand<'a> {
    Skip,
    Quit,
    Retry,
    Analyze(&'a str),
}

pub(crate) fn parse_line(line: &str) -> LineCommand<'_> {
    match line.trim() {
        "" => LineCommand::Skip,
        "quit" | "exit" => LineCommand::Quit,
        "retry" => LineCommand::Retry,
        url => LineCommand::Analyze(url),
    }
}

/// Prints the settled state of the session.
fn print_outcome(session: &AnalysisSession, out: &mut impl Write) -> io::Result<()> {
    if let Some(report) = session.report() {
        write!(out, "{}", render_report(report))?;
    } else if let Some(err) = session.error() {
        write!(out, "{}", render_failure(&err.to_string()))?;
        writeln!(out, "Type `retry` to try again.")?;
    }
    Ok(())
}

/// Drives a session from `input`; one analysis at a time, blocking on each.
pub(crate) fn interactive_loop(
    predictor: &dyn Predictor,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let mut session = AnalysisSession::new();
    write!(out, "url> ")?;
    out.flush()?;
    for line in input.lines() {
        let line = line.context("read stdin")?;
        let result = match parse_line(&line) {
            LineCommand::Skip => {
                write!(out, "url> ")?;
                out.flush()?;
                continue;
            }
            LineCommand::Quit => break,
            LineCommand::Retry => session.retry(predictor),
            LineCommand::Analyze(url) => session.run(url, predictor),
        };
        match result {
            Ok(()) => print_outcome(&session, out)?,
            Err(e) => writeln!(out, "{e}")?,
        }
        write!(out, "url> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

pub async fn run_interactive(cfg: &PhishguardConfig) -> Result<()> {
    let predictor = HttpPredictor::from_config(cfg);
    println!("Analyzing with {} (quit to exit)", predictor.base_url());
    tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        interactive_loop(&predictor, stdin.lock(), &mut stdout)
    })
    .await
    .context("interactive task join")?
}
