/*!
 * Scheduling Simulator - Main Entry Point
 *
 * Usage: schedsim [RUN_FILE]
 *
 * Runs every scheduling request and the deadlock check described in the JSON
 * run file, or a built-in demo when no file is given.
 */

use miette::{IntoDiagnostic, Result};
use schedsim::{execute, init_tracing, JsonSink, OutputFormat, ReportSink, RunConfig, TextSink};
use std::io::Write;
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::from_file(&path)?,
        None => {
            info!("No run file given, running built-in demo");
            RunConfig::demo()
        }
    }
    .apply_env_overrides()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut sink: Box<dyn ReportSink + '_> = match config.output {
        OutputFormat::Text => Box::new(TextSink::new(&mut out)),
        OutputFormat::Json => Box::new(JsonSink::new(&mut out)),
    };

    let summary = execute(&config, sink.as_mut())?;
    drop(sink);
    out.flush().into_diagnostic()?;

    info!(
        schedules = summary.schedules,
        deadlocked = summary.deadlocked,
        "Simulator finished"
    );
    Ok(())
}
