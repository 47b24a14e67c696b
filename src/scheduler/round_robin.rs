/*!
 * Round Robin Simulator
 * Time-sliced preemptive execution with a fixed quantum
 */

use super::metrics::TimingMetrics;
use super::types::{TimeQuantum, TimeSlice};
use crate::core::errors::{ArgResult, InvalidArgument};
use crate::core::types::{is_valid_time, Pid, Time};
use crate::process::ProcessState;
use std::collections::VecDeque;
use tracing::debug;

/// Slack allowed when comparing remaining time against the quantum, in
/// units of `Time::EPSILON` scaled by the larger of burst and quantum
const COMPLETION_ULPS: Time = 8.0;

/// Ready-queue entry; private to one simulation
#[derive(Debug, Clone, Copy)]
struct Entry {
    index: usize,
    /// Full quanta already granted
    served: u64,
}

/// Result of one round robin simulation, indexed by submission order
#[derive(Debug, Clone, PartialEq)]
pub struct RoundRobinOutcome {
    pub metrics: TimingMetrics,
    /// Clock value when the ready queue drained
    pub total_time: Time,
    /// Consecutive slices of the same process are merged
    pub timeline: Vec<TimeSlice>,
}

/// Round robin scheduler
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRobin {
    quantum: TimeQuantum,
}

impl RoundRobin {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }

    /// Validate a raw quantum and build the scheduler
    pub fn with_quantum(quantum: Time) -> ArgResult<Self> {
        Ok(Self::new(TimeQuantum::new(quantum)?))
    }

    /// Simulate processes numbered P1..Pn in submission order
    pub fn simulate(&self, bursts: &[Time]) -> ArgResult<RoundRobinOutcome> {
        let pids: Vec<Pid> = (1..=bursts.len() as Pid).collect();
        self.simulate_processes(bursts, &pids)
    }

    /// Simulate with explicit process ids (index-aligned with `bursts`)
    ///
    /// Remaining time is derived from the number of quanta served rather
    /// than by repeated subtraction, and the clock is the sum of finished
    /// bursts plus the quanta granted to unfinished processes. Fractional
    /// quanta therefore finish on the right slice and never yield a
    /// negative waiting time.
    pub(crate) fn simulate_processes(&self, bursts: &[Time], pids: &[Pid]) -> ArgResult<RoundRobinOutcome> {
        debug_assert_eq!(bursts.len(), pids.len());
        for (index, &value) in bursts.iter().enumerate() {
            if !is_valid_time(value) {
                return Err(InvalidArgument::InvalidBurstTime { index, value });
            }
        }

        let quantum = self.quantum.get();
        let mut waiting = vec![0.0; bursts.len()];
        let mut timeline: Vec<TimeSlice> = Vec::new();
        let mut finished_work = 0.0;
        let mut quanta_in_flight: u64 = 0;
        let mut clock = 0.0;

        // Zero-burst processes finish immediately and never queue
        let mut queue: VecDeque<Entry> = bursts
            .iter()
            .enumerate()
            .filter(|(_, burst)| **burst > 0.0)
            .map(|(index, _)| Entry { index, served: 0 })
            .collect();

        while let Some(mut entry) = queue.pop_front() {
            let start = clock;
            let pid = pids[entry.index];
            let burst = bursts[entry.index];
            let remaining = burst - entry.served as Time * quantum;
            let slack = COMPLETION_ULPS * Time::EPSILON * burst.max(quantum);

            let state = if remaining <= quantum + slack {
                quanta_in_flight -= entry.served;
                finished_work += burst;
                clock = (finished_work + quanta_in_flight as Time * quantum).max(start);
                waiting[entry.index] = (clock - burst).max(0.0);

                debug!(pid, clock, "process finished");
                ProcessState::Terminated
            } else {
                entry.served += 1;
                quanta_in_flight += 1;
                clock = (finished_work + quanta_in_flight as Time * quantum).max(start);

                debug!(pid, clock, remaining = remaining - quantum, "quantum expired");
                queue.push_back(entry);
                ProcessState::Ready
            };

            match timeline.last_mut() {
                Some(last) if last.pid == pid => {
                    last.end = clock;
                    last.state = state;
                    last.dispatches += 1;
                }
                _ => timeline.push(TimeSlice {
                    pid,
                    start,
                    end: clock,
                    state,
                    dispatches: 1,
                }),
            }
        }

        let turnaround = bursts.iter().zip(&waiting).map(|(b, w)| b + w).collect();

        Ok(RoundRobinOutcome {
            metrics: TimingMetrics {
                waiting,
                turnaround,
            },
            total_time: clock,
            timeline,
        })
    }
}
