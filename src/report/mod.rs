/*!
 * Report Sinks
 * Destinations for scheduling results and deadlock verdicts
 */

mod json;
mod text;

pub use json::JsonSink;
pub use text::TextSink;

use crate::core::errors::SimResult;
use crate::deadlock::DeadlockReport;
use crate::scheduler::ScheduleReport;

/// Receives computed results; rendering is up to the implementation
pub trait ReportSink {
    fn emit_schedule(&mut self, report: &ScheduleReport) -> SimResult<()>;

    fn emit_deadlock(&mut self, report: &DeadlockReport) -> SimResult<()>;
}

/// Keeps every emitted report in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub schedules: Vec<ScheduleReport>,
    pub deadlocks: Vec<DeadlockReport>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty() && self.deadlocks.is_empty()
    }
}

impl ReportSink for MemorySink {
    fn emit_schedule(&mut self, report: &ScheduleReport) -> SimResult<()> {
        self.schedules.push(report.clone());
        Ok(())
    }

    fn emit_deadlock(&mut self, report: &DeadlockReport) -> SimResult<()> {
        self.deadlocks.push(report.clone());
        Ok(())
    }
}
