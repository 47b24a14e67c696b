/*!
 * Scheduling Requests
 * Validates raw caller input into a typed strategy and workload
 */

use super::report::ScheduleReport;
use super::strategies::Strategy;
use super::traits::SchedulingStrategy;
use super::types::{Algorithm, TimeQuantum};
use crate::core::errors::{ArgResult, InvalidArgument};
use crate::core::types::{Priority, Time};
use crate::process::Workload;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Untyped scheduling input, as read from a run file or built by a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulingRequest {
    /// Algorithm selector, case-insensitive
    pub algorithm: String,
    pub burst_times: Vec<Time>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priorities: Option<Vec<Priority>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_quantum: Option<Time>,
}

impl SchedulingRequest {
    pub fn new(algorithm: impl Into<String>, burst_times: Vec<Time>) -> Self {
        Self {
            algorithm: algorithm.into(),
            burst_times,
            priorities: None,
            time_quantum: None,
        }
    }

    pub fn with_priorities(mut self, priorities: Vec<Priority>) -> Self {
        self.priorities = Some(priorities);
        self
    }

    pub fn with_time_quantum(mut self, quantum: Time) -> Self {
        self.time_quantum = Some(quantum);
        self
    }

    /// Validate every input rule before anything runs
    pub fn plan(&self) -> ArgResult<(Strategy, Workload)> {
        let algorithm: Algorithm = self.algorithm.parse()?;

        if algorithm.requires_priorities() && self.priorities.is_none() {
            return Err(InvalidArgument::MissingPriorities);
        }

        let quantum = if algorithm.requires_quantum() {
            let value = self.time_quantum.ok_or(InvalidArgument::MissingQuantum)?;
            Some(TimeQuantum::new(value)?)
        } else {
            None
        };

        let workload = Workload::from_bursts(&self.burst_times, self.priorities.as_deref())?;
        let strategy = Strategy::new(algorithm, quantum)?;

        debug!(%algorithm, processes = workload.len(), "Scheduling request validated");
        Ok((strategy, workload))
    }
}

/// Validate and run one scheduling request
pub fn simulate(request: &SchedulingRequest) -> ArgResult<ScheduleReport> {
    let (strategy, workload) = request.plan()?;
    strategy.schedule(&workload)
}

/// Run every algorithm over the same workload, in `Algorithm::ALL` order
pub fn compare_all(workload: &Workload, quantum: TimeQuantum) -> ArgResult<Vec<ScheduleReport>> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| Strategy::new(algorithm, Some(quantum))?.schedule(workload))
        .collect()
}
