/*!
 * Workload
 * Validated, submission-ordered set of processes for one simulation run
 */

use super::types::{ProcessRecord, DEFAULT_PRIORITY};
use crate::core::errors::{ArgResult, InvalidArgument};
use crate::core::types::{is_valid_time, Pid, Priority, Time};
use ahash::AHashSet;
use serde::Serialize;

/// Processes in submission (arrival) order
///
/// Construction validates every record once, so strategies can rely on
/// positive unique ids and finite non-negative times.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Workload {
    records: Vec<ProcessRecord>,
}

impl Workload {
    /// Build a workload from explicit records
    pub fn new(records: Vec<ProcessRecord>) -> ArgResult<Self> {
        let mut seen = AHashSet::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            if record.id == 0 {
                return Err(InvalidArgument::InvalidProcessId { index });
            }
            if !seen.insert(record.id) {
                return Err(InvalidArgument::DuplicateProcessId(record.id));
            }
            if !is_valid_time(record.burst_time) {
                return Err(InvalidArgument::InvalidBurstTime {
                    index,
                    value: record.burst_time,
                });
            }
            if !is_valid_time(record.arrival_time) {
                return Err(InvalidArgument::InvalidArrivalTime {
                    index,
                    value: record.arrival_time,
                });
            }
        }

        Ok(Self { records })
    }

    /// Build a workload from bare burst times, numbering processes P1..Pn
    pub fn from_bursts(bursts: &[Time], priorities: Option<&[Priority]>) -> ArgResult<Self> {
        if let Some(priorities) = priorities {
            if priorities.len() != bursts.len() {
                return Err(InvalidArgument::PriorityLengthMismatch {
                    expected: bursts.len(),
                    actual: priorities.len(),
                });
            }
        }

        let records = bursts
            .iter()
            .enumerate()
            .map(|(i, &burst)| {
                let priority = priorities.map_or(DEFAULT_PRIORITY, |p| p[i]);
                ProcessRecord::new(i as Pid + 1, burst).with_priority(priority)
            })
            .collect();

        Self::new(records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Burst times in submission order
    pub fn bursts(&self) -> Vec<Time> {
        self.records.iter().map(|r| r.burst_time).collect()
    }

    /// Priorities in submission order
    pub fn priorities(&self) -> Vec<Priority> {
        self.records.iter().map(|r| r.priority).collect()
    }

    pub fn pids(&self) -> Vec<Pid> {
        self.records.iter().map(|r| r.id).collect()
    }

    pub fn total_burst_time(&self) -> Time {
        self.records.iter().map(|r| r.burst_time).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bursts_numbers_processes() {
        let workload = Workload::from_bursts(&[24.0, 3.0, 3.0], None).unwrap();
        assert_eq!(workload.pids(), vec![1, 2, 3]);
        assert_eq!(workload.priorities(), vec![0, 0, 0]);
        assert_eq!(workload.total_burst_time(), 30.0);
    }

    #[test]
    fn test_from_bursts_priority_mismatch() {
        let err = Workload::from_bursts(&[1.0, 2.0], Some(&[1])).unwrap_err();
        assert_eq!(
            err,
            InvalidArgument::PriorityLengthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_rejects_negative_burst() {
        let err = Workload::from_bursts(&[1.0, -2.0], None).unwrap_err();
        assert!(matches!(err, InvalidArgument::InvalidBurstTime { index: 1, .. }));
    }

    #[test]
    fn test_rejects_invalid_arrival_time() {
        let records = vec![
            ProcessRecord::new(1, 1.0),
            ProcessRecord::new(2, 3.0).with_arrival_time(-1.0),
        ];
        assert_eq!(
            Workload::new(records).unwrap_err(),
            InvalidArgument::InvalidArrivalTime {
                index: 1,
                value: -1.0
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_and_zero_ids() {
        let dup = vec![ProcessRecord::new(1, 1.0), ProcessRecord::new(1, 2.0)];
        assert_eq!(
            Workload::new(dup).unwrap_err(),
            InvalidArgument::DuplicateProcessId(1)
        );

        let zero = vec![ProcessRecord::new(0, 1.0)];
        assert_eq!(
            Workload::new(zero).unwrap_err(),
            InvalidArgument::InvalidProcessId { index: 0 }
        );
    }

    #[test]
    fn test_empty_workload_is_valid() {
        let workload = Workload::from_bursts(&[], None).unwrap();
        assert!(workload.is_empty());
        assert_eq!(workload.total_burst_time(), 0.0);
    }
}
