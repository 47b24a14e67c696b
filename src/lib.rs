/*!
 * Scheduling Simulator Library
 * Deterministic CPU scheduling strategies and deadlock detection
 */

pub mod config;
pub mod core;
pub mod deadlock;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod runner;
pub mod scheduler;

// Re-exports
pub use config::{OutputFormat, RunConfig};
pub use crate::core::errors::{ArgResult, InvalidArgument, SimError, SimResult};
pub use crate::core::types::{Pid, Priority, Time};
pub use deadlock::{detect_deadlock, DeadlockDetector, DeadlockInput, DeadlockReport, ResourceSnapshot};
pub use monitoring::init_tracing;
pub use process::{ProcessRecord, Workload};
pub use report::{JsonSink, MemorySink, ReportSink, TextSink};
pub use runner::{execute, RunSummary};
pub use scheduler::{
    compare_all, simulate, Algorithm, ProcessMetrics, ScheduleReport, SchedulingRequest,
    SchedulingStrategy, Strategy, TimeQuantum,
};
