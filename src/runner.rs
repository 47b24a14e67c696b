/*!
 * Runner
 * Executes a run configuration against a report sink
 */

use crate::config::RunConfig;
use crate::core::errors::{InvalidArgument, SimResult};
use crate::deadlock::DeadlockDetector;
use crate::monitoring::RunSpan;
use crate::report::ReportSink;
use crate::scheduler::SchedulingStrategy;
use tracing::info;

/// What a completed run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub schedules: usize,
    pub deadlock_checked: bool,
    pub deadlocked: bool,
}

/// Validate every request, then run them all and emit the results
///
/// Nothing reaches the sink if any input is invalid.
pub fn execute(config: &RunConfig, sink: &mut dyn ReportSink) -> SimResult<RunSummary> {
    let plans = config
        .scheduling
        .iter()
        .map(|request| request.plan())
        .collect::<Result<Vec<_>, InvalidArgument>>()?;

    let snapshot = config
        .deadlock
        .as_ref()
        .map(|input| input.snapshot())
        .transpose()?;

    let mut summary = RunSummary::default();

    for (strategy, workload) in &plans {
        let span = RunSpan::new("schedule");
        let _entered = span.enter();
        span.record_processes(workload.len());

        let report = strategy.schedule(workload).inspect_err(|e| {
            span.record_error(&e.to_string());
        })?;
        sink.emit_schedule(&report)?;

        span.record_result(true);
        summary.schedules += 1;
    }

    if let Some(snapshot) = snapshot {
        let span = RunSpan::new("deadlock");
        let _entered = span.enter();
        span.record_processes(snapshot.process_count());

        let report = DeadlockDetector::new().analyze(&snapshot);
        sink.emit_deadlock(&report)?;

        span.record_result(true);
        summary.deadlock_checked = true;
        summary.deadlocked = report.deadlocked;
    }

    info!(
        schedules = summary.schedules,
        deadlock_checked = summary.deadlock_checked,
        deadlocked = summary.deadlocked,
        "All runs complete"
    );
    Ok(summary)
}
