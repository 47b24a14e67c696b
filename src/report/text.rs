/*!
 * Text Sink
 * Human-readable console rendering
 */

use super::ReportSink;
use crate::core::errors::SimResult;
use crate::deadlock::DeadlockReport;
use crate::scheduler::ScheduleReport;
use std::io::Write;

/// Writes reports as plain text, times with two decimals in ms
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn emit_schedule(&mut self, report: &ScheduleReport) -> SimResult<()> {
        writeln!(self.out, "{} Results:", report.label())?;

        for m in &report.processes {
            writeln!(
                self.out,
                "Process P{}: Waiting Time = {:.2} ms, Turnaround Time = {:.2} ms",
                m.pid, m.waiting_time, m.turnaround_time
            )?;
        }

        writeln!(self.out)?;
        writeln!(
            self.out,
            "Average Waiting Time = {:.2} ms",
            report.average_waiting_time
        )?;
        writeln!(
            self.out,
            "Average Turnaround Time = {:.2} ms",
            report.average_turnaround_time
        )?;
        Ok(())
    }

    fn emit_deadlock(&mut self, report: &DeadlockReport) -> SimResult<()> {
        if report.deadlocked {
            writeln!(self.out, "Deadlock detected among processes!")?;
            writeln!(self.out, "Blocked process rows: {:?}", report.blocked)?;
        } else {
            writeln!(self.out, "No deadlock detected.")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{simulate, SchedulingRequest};

    #[test]
    fn test_schedule_rendering() {
        let report = simulate(&SchedulingRequest::new("fcfs", vec![24.0, 3.0, 3.0])).unwrap();
        let mut sink = TextSink::new(Vec::new());
        sink.emit_schedule(&report).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let expected = "\
First Come First Serve Results:
Process P1: Waiting Time = 0.00 ms, Turnaround Time = 24.00 ms
Process P2: Waiting Time = 24.00 ms, Turnaround Time = 27.00 ms
Process P3: Waiting Time = 27.00 ms, Turnaround Time = 30.00 ms

Average Waiting Time = 17.00 ms
Average Turnaround Time = 27.00 ms
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_deadlock_rendering() {
        let mut sink = TextSink::new(Vec::new());
        sink.emit_deadlock(&DeadlockReport {
            deadlocked: false,
            completion_order: vec![0],
            blocked: vec![],
        })
        .unwrap();
        sink.emit_deadlock(&DeadlockReport {
            deadlocked: true,
            completion_order: vec![],
            blocked: vec![0, 1],
        })
        .unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            text,
            "No deadlock detected.\nDeadlock detected among processes!\nBlocked process rows: [0, 1]\n"
        );
    }
}
