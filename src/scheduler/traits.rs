/*!
 * Scheduler Traits
 * Interface shared by every scheduling strategy
 */

use super::report::ScheduleReport;
use super::types::Algorithm;
use crate::core::errors::ArgResult;
use crate::process::Workload;

/// A scheduling discipline that turns a workload into timing metrics
pub trait SchedulingStrategy {
    /// Which algorithm this strategy implements
    fn algorithm(&self) -> Algorithm;

    /// Run the workload to completion and report per-process metrics
    ///
    /// The workload is never mutated.
    fn schedule(&self, workload: &Workload) -> ArgResult<ScheduleReport>;
}
