/*!
 * JSON Sink
 * One JSON document per line for machine consumption
 */

use super::ReportSink;
use crate::core::errors::SimResult;
use crate::deadlock::DeadlockReport;
use crate::scheduler::ScheduleReport;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Record<'a> {
    Schedule {
        label: &'static str,
        #[serde(flatten)]
        report: &'a ScheduleReport,
    },
    Deadlock {
        #[serde(flatten)]
        report: &'a DeadlockReport,
    },
}

/// Writes each report as a JSON line tagged with its `kind`
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, record: &Record<'_>) -> SimResult<()> {
        serde_json::to_writer(&mut self.out, record)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn emit_schedule(&mut self, report: &ScheduleReport) -> SimResult<()> {
        self.write_record(&Record::Schedule {
            label: report.label(),
            report,
        })
    }

    fn emit_deadlock(&mut self, report: &DeadlockReport) -> SimResult<()> {
        self.write_record(&Record::Deadlock { report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{simulate, SchedulingRequest};
    use serde_json::Value;

    #[test]
    fn test_schedule_line() {
        let report = simulate(&SchedulingRequest::new("sjf", vec![6.0, 2.0])).unwrap();
        let mut sink = JsonSink::new(Vec::new());
        sink.emit_schedule(&report).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.ends_with('\n'));

        let value: Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["kind"], "schedule");
        assert_eq!(value["algorithm"], "sjf");
        assert_eq!(value["label"], "Shortest Job First");
        assert_eq!(value["processes"][0]["pid"], 2);
        assert_eq!(value["average_waiting_time"], 1.0);
    }

    #[test]
    fn test_deadlock_line() {
        let mut sink = JsonSink::new(Vec::new());
        sink.emit_deadlock(&DeadlockReport {
            deadlocked: true,
            completion_order: vec![0],
            blocked: vec![1],
        })
        .unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let value: Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["kind"], "deadlock");
        assert_eq!(value["deadlocked"], true);
        assert_eq!(value["blocked"][0], 1);
    }
}
