/*!
 * Metrics Calculator
 * Waiting and turnaround times for back-to-back, non-preemptive execution
 */

use super::types::TimeSlice;
use crate::core::types::{Pid, Time};
use crate::process::ProcessState;

/// Waiting time per slot: the cumulative burst time of every earlier slot
pub fn waiting_times(ordered_bursts: &[Time]) -> Vec<Time> {
    let mut waiting = Vec::with_capacity(ordered_bursts.len());
    let mut elapsed = 0.0;
    for &burst in ordered_bursts {
        waiting.push(elapsed);
        elapsed += burst;
    }
    waiting
}

/// Turnaround time per slot: `burst[i] + waiting[i]`
pub fn turnaround_times(ordered_bursts: &[Time], waiting: &[Time]) -> Vec<Time> {
    debug_assert_eq!(ordered_bursts.len(), waiting.len());
    ordered_bursts
        .iter()
        .zip(waiting)
        .map(|(burst, wait)| burst + wait)
        .collect()
}

/// Arithmetic mean; an empty sequence averages to zero
pub fn average(values: &[Time]) -> Time {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<Time>() / values.len() as Time
}

/// Gantt slices for processes run to completion in the given order
pub fn completion_timeline(ordered_bursts: &[Time], pids: &[Pid]) -> Vec<TimeSlice> {
    let mut clock = 0.0;
    ordered_bursts
        .iter()
        .zip(pids)
        .map(|(&burst, &pid)| {
            let start = clock;
            clock += burst;
            TimeSlice {
                pid,
                start,
                end: clock,
                state: ProcessState::Terminated,
                dispatches: 1,
            }
        })
        .collect()
}

/// Parallel waiting / turnaround sequences, index-aligned with their bursts
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimingMetrics {
    pub waiting: Vec<Time>,
    pub turnaround: Vec<Time>,
}

impl TimingMetrics {
    /// Metrics for bursts already arranged in execution order
    pub fn from_ordered_bursts(ordered_bursts: &[Time]) -> Self {
        let waiting = waiting_times(ordered_bursts);
        let turnaround = turnaround_times(ordered_bursts, &waiting);
        Self {
            waiting,
            turnaround,
        }
    }

    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    pub fn average_waiting(&self) -> Time {
        average(&self.waiting)
    }

    pub fn average_turnaround(&self) -> Time {
        average(&self.turnaround)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_fcfs() {
        let metrics = TimingMetrics::from_ordered_bursts(&[24.0, 3.0, 3.0]);
        assert_eq!(metrics.waiting, vec![0.0, 24.0, 27.0]);
        assert_eq!(metrics.turnaround, vec![24.0, 27.0, 30.0]);
        assert_eq!(metrics.average_waiting(), 17.0);
        assert_eq!(metrics.average_turnaround(), 27.0);
    }

    #[test]
    fn test_zero_burst_slot() {
        let metrics = TimingMetrics::from_ordered_bursts(&[0.0, 5.0, 0.0]);
        assert_eq!(metrics.waiting, vec![0.0, 0.0, 5.0]);
        assert_eq!(metrics.turnaround, vec![0.0, 5.0, 5.0]);
    }

    #[test]
    fn test_empty_sequence_averages_zero() {
        let metrics = TimingMetrics::from_ordered_bursts(&[]);
        assert!(metrics.is_empty());
        assert_eq!(metrics.average_waiting(), 0.0);
        assert_eq!(metrics.average_turnaround(), 0.0);
    }

    #[test]
    fn test_completion_timeline() {
        let timeline = completion_timeline(&[3.0, 2.0], &[7, 4]);
        assert_eq!(timeline.len(), 2);
        assert_eq!((timeline[0].pid, timeline[0].start, timeline[0].end), (7, 0.0, 3.0));
        assert_eq!((timeline[1].pid, timeline[1].start, timeline[1].end), (4, 3.0, 5.0));
    }
}
