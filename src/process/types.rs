/*!
 * Process Types
 * Passive process descriptions consumed by the scheduling strategies
 */

use crate::core::types::{Pid, Priority, Time};
use serde::{Deserialize, Serialize};

/// Default priority assigned when none is supplied
pub const DEFAULT_PRIORITY: Priority = 0;

/// State of a process at the end of a time slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Process still has work left and is back in the ready queue
    Ready,
    /// Process has drained its burst time
    Terminated,
}

/// One simulated process
///
/// Strategies never mutate a record; round robin keeps its own
/// remaining-time copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRecord {
    pub id: Pid,
    pub burst_time: Time,
    #[serde(default, skip_serializing_if = "crate::core::serde::is_zero")]
    pub arrival_time: Time,
    #[serde(default)]
    pub priority: Priority,
}

impl ProcessRecord {
    pub fn new(id: Pid, burst_time: Time) -> Self {
        Self {
            id,
            burst_time,
            arrival_time: 0.0,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Arrival time is informational; every process is ready at t = 0
    pub fn with_arrival_time(mut self, arrival_time: Time) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}
