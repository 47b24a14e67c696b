/*!
 * Schedule Reports
 * Plain numeric results handed to a report sink
 */

use super::metrics::{average, completion_timeline, TimingMetrics};
use super::ordering::apply_permutation;
use super::round_robin::RoundRobinOutcome;
use super::types::{Algorithm, TimeSlice};
use crate::core::serde::is_empty_vec;
use crate::core::types::{Pid, Time};
use crate::process::Workload;
use serde::{Deserialize, Serialize};

/// Per-process timing result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub burst_time: Time,
    pub waiting_time: Time,
    pub turnaround_time: Time,
}

/// Result of one scheduling run
///
/// Non-preemptive strategies list processes in execution order; round robin
/// lists them in submission order since every process shares the CPU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScheduleReport {
    pub algorithm: Algorithm,
    pub processes: Vec<ProcessMetrics>,
    pub average_waiting_time: Time,
    pub average_turnaround_time: Time,
    /// Clock value once every process finished
    pub total_time: Time,
    #[serde(default, skip_serializing_if = "is_empty_vec")]
    pub timeline: Vec<TimeSlice>,
}

impl ScheduleReport {
    /// Report for a run-to-completion strategy given its execution order
    pub(crate) fn non_preemptive(
        algorithm: Algorithm,
        workload: &Workload,
        permutation: &[usize],
    ) -> Self {
        let ordered_bursts = apply_permutation(&workload.bursts(), permutation);
        let ordered_pids = apply_permutation(&workload.pids(), permutation);
        let metrics = TimingMetrics::from_ordered_bursts(&ordered_bursts);
        let timeline = completion_timeline(&ordered_bursts, &ordered_pids);

        Self::assemble(
            algorithm,
            &ordered_pids,
            &ordered_bursts,
            &metrics,
            workload.total_burst_time(),
            timeline,
        )
    }

    /// Report for a round robin simulation over `workload`
    pub(crate) fn round_robin(workload: &Workload, outcome: RoundRobinOutcome) -> Self {
        Self::assemble(
            Algorithm::RoundRobin,
            &workload.pids(),
            &workload.bursts(),
            &outcome.metrics,
            outcome.total_time,
            outcome.timeline,
        )
    }

    fn assemble(
        algorithm: Algorithm,
        pids: &[Pid],
        bursts: &[Time],
        metrics: &TimingMetrics,
        total_time: Time,
        timeline: Vec<TimeSlice>,
    ) -> Self {
        let processes = pids
            .iter()
            .zip(bursts)
            .zip(metrics.waiting.iter().zip(&metrics.turnaround))
            .map(|((&pid, &burst_time), (&waiting_time, &turnaround_time))| ProcessMetrics {
                pid,
                burst_time,
                waiting_time,
                turnaround_time,
            })
            .collect();

        Self {
            algorithm,
            processes,
            average_waiting_time: average(&metrics.waiting),
            average_turnaround_time: average(&metrics.turnaround),
            total_time,
            timeline,
        }
    }

    pub fn label(&self) -> &'static str {
        self.algorithm.label()
    }

    /// Metrics for one process by id
    pub fn metrics_for(&self, pid: Pid) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.pid == pid)
    }

    /// Process ids in the order they appear in the report
    pub fn execution_order(&self) -> Vec<Pid> {
        self.processes.iter().map(|m| m.pid).collect()
    }

    pub fn waiting_times(&self) -> Vec<Time> {
        self.processes.iter().map(|m| m.waiting_time).collect()
    }

    pub fn turnaround_times(&self) -> Vec<Time> {
        self.processes.iter().map(|m| m.turnaround_time).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ordering::burst_permutation;

    #[test]
    fn test_non_preemptive_report_keeps_identity() {
        let workload = Workload::from_bursts(&[6.0, 8.0, 7.0, 3.0], None).unwrap();
        let order = burst_permutation(&workload.bursts());
        let report = ScheduleReport::non_preemptive(Algorithm::Sjf, &workload, &order);

        assert_eq!(report.execution_order(), vec![4, 1, 3, 2]);
        assert_eq!(report.metrics_for(4).unwrap().waiting_time, 0.0);
        assert_eq!(report.metrics_for(2).unwrap().waiting_time, 16.0);
        assert_eq!(report.average_waiting_time, 7.0);
        assert_eq!(report.total_time, 24.0);
        assert_eq!(report.label(), "Shortest Job First");
    }

    #[test]
    fn test_empty_report() {
        let workload = Workload::from_bursts(&[], None).unwrap();
        let report = ScheduleReport::non_preemptive(Algorithm::Fcfs, &workload, &[]);
        assert!(report.processes.is_empty());
        assert_eq!(report.average_waiting_time, 0.0);
        assert_eq!(report.average_turnaround_time, 0.0);
    }
}
