/*!
 * Scheduling Strategies
 * The four disciplines and the closed set that dispatches between them
 */

use super::ordering::{arrival_permutation, burst_permutation, priority_permutation};
use super::report::ScheduleReport;
use super::round_robin::RoundRobin;
use super::traits::SchedulingStrategy;
use super::types::{Algorithm, TimeQuantum};
use crate::core::errors::{ArgResult, InvalidArgument};
use crate::process::Workload;
use tracing::{info, instrument};

/// Runs processes in submission order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstComeFirstServed;

impl SchedulingStrategy for FirstComeFirstServed {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn schedule(&self, workload: &Workload) -> ArgResult<ScheduleReport> {
        let order = arrival_permutation(workload.len());
        Ok(ScheduleReport::non_preemptive(
            self.algorithm(),
            workload,
            &order,
        ))
    }
}

/// Runs the shortest burst first; the order is fixed before execution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortestJobFirst;

impl SchedulingStrategy for ShortestJobFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn schedule(&self, workload: &Workload) -> ArgResult<ScheduleReport> {
        let order = burst_permutation(&workload.bursts());
        Ok(ScheduleReport::non_preemptive(
            self.algorithm(),
            workload,
            &order,
        ))
    }
}

/// Runs the numerically smallest priority first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityScheduling;

impl SchedulingStrategy for PriorityScheduling {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Priority
    }

    fn schedule(&self, workload: &Workload) -> ArgResult<ScheduleReport> {
        let order = priority_permutation(&workload.bursts(), &workload.priorities())?;
        Ok(ScheduleReport::non_preemptive(
            self.algorithm(),
            workload,
            &order,
        ))
    }
}

impl SchedulingStrategy for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn schedule(&self, workload: &Workload) -> ArgResult<ScheduleReport> {
        let outcome = self.simulate_processes(&workload.bursts(), &workload.pids())?;
        Ok(ScheduleReport::round_robin(workload, outcome))
    }
}

/// Closed set of strategies, each carrying the parameters it needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    Fcfs,
    Sjf,
    /// Priorities come from each process record
    Priority,
    RoundRobin(TimeQuantum),
}

impl Strategy {
    /// Build a strategy for `algorithm`; round robin requires a quantum
    pub fn new(algorithm: Algorithm, quantum: Option<TimeQuantum>) -> ArgResult<Self> {
        Ok(match algorithm {
            Algorithm::Fcfs => Self::Fcfs,
            Algorithm::Sjf => Self::Sjf,
            Algorithm::Priority => Self::Priority,
            Algorithm::RoundRobin => {
                Self::RoundRobin(quantum.ok_or(InvalidArgument::MissingQuantum)?)
            }
        })
    }
}

impl SchedulingStrategy for Strategy {
    fn algorithm(&self) -> Algorithm {
        match self {
            Self::Fcfs => Algorithm::Fcfs,
            Self::Sjf => Algorithm::Sjf,
            Self::Priority => Algorithm::Priority,
            Self::RoundRobin(_) => Algorithm::RoundRobin,
        }
    }

    #[instrument(skip_all, fields(algorithm = %self.algorithm(), processes = workload.len()))]
    fn schedule(&self, workload: &Workload) -> ArgResult<ScheduleReport> {
        let report = match self {
            Self::Fcfs => FirstComeFirstServed.schedule(workload)?,
            Self::Sjf => ShortestJobFirst.schedule(workload)?,
            Self::Priority => PriorityScheduling.schedule(workload)?,
            Self::RoundRobin(quantum) => RoundRobin::new(*quantum).schedule(workload)?,
        };

        info!(
            avg_waiting = report.average_waiting_time,
            avg_turnaround = report.average_turnaround_time,
            total_time = report.total_time,
            "Scheduling run complete"
        );

        Ok(report)
    }
}
