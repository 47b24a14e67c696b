/*!
 * Deadlock Detector
 * Safety check over a single resource-allocation snapshot
 *
 * Works on outstanding requests rather than maximum future need: it answers
 * "is the system stuck right now", not "is granting this request safe".
 */

use super::types::{DeadlockReport, ResourceSnapshot};
use crate::core::errors::ArgResult;
use tracing::{debug, instrument, warn};

/// Stateless detector; all working state lives in one `analyze` call
#[derive(Debug, Clone, Copy, Default)]
pub struct DeadlockDetector;

impl DeadlockDetector {
    pub fn new() -> Self {
        Self
    }

    /// Run the safety algorithm and report which processes can finish
    ///
    /// Repeats passes over the unfinished processes, letting any process whose
    /// whole request fits in `work` finish and release its allocation, until a
    /// pass makes no progress. The finished set is the unique fixed point, so
    /// the verdict does not depend on iteration order.
    #[instrument(skip_all, fields(processes = snapshot.process_count(), resources = snapshot.resource_count()))]
    pub fn analyze(&self, snapshot: &ResourceSnapshot) -> DeadlockReport {
        let processes = snapshot.process_count();
        let allocation = snapshot.allocation();
        let request = snapshot.request();

        // u64 so repeated releases cannot overflow
        let mut work: Vec<u64> = snapshot.available().iter().map(|&v| u64::from(v)).collect();
        let mut finish = vec![false; processes];
        let mut completion_order = Vec::with_capacity(processes);

        let mut pass = 0usize;
        loop {
            let mut progress = false;
            pass += 1;

            for i in 0..processes {
                if finish[i] {
                    continue;
                }

                let satisfiable = request
                    .row(i)
                    .iter()
                    .zip(&work)
                    .all(|(&want, &free)| u64::from(want) <= free);

                if satisfiable {
                    for (free, &held) in work.iter_mut().zip(allocation.row(i)) {
                        *free += u64::from(held);
                    }
                    finish[i] = true;
                    completion_order.push(i);
                    progress = true;
                    debug!(process = i, pass, "process can finish, allocation released");
                }
            }

            if !progress {
                break;
            }
        }

        let blocked: Vec<usize> = (0..processes).filter(|&i| !finish[i]).collect();
        let deadlocked = !blocked.is_empty();

        if deadlocked {
            warn!(blocked = ?blocked, "Deadlock detected");
        } else {
            debug!(passes = pass, "No deadlock detected");
        }

        DeadlockReport {
            deadlocked,
            completion_order,
            blocked,
        }
    }

    /// Verdict only: true if at least one process can never finish
    pub fn detect(&self, snapshot: &ResourceSnapshot) -> bool {
        self.analyze(snapshot).deadlocked
    }
}

/// Validate the raw matrices and return the deadlock verdict
pub fn detect_deadlock(
    allocation: &[Vec<u32>],
    request: &[Vec<u32>],
    available: &[u32],
) -> ArgResult<bool> {
    let snapshot = ResourceSnapshot::new(allocation, request, available)?;
    Ok(DeadlockDetector::new().detect(&snapshot))
}
