/*!
 * Scheduler Module
 * CPU scheduling strategies and timing metrics
 */

pub mod metrics;
pub mod ordering;
pub mod report;
pub mod request;
pub mod round_robin;
pub mod strategies;
pub mod traits;
pub mod types;

// Re-export public API
pub use metrics::TimingMetrics;
pub use ordering::{by_ascending_burst_time, by_ascending_priority, identity_order};
pub use report::{ProcessMetrics, ScheduleReport};
pub use request::{compare_all, simulate, SchedulingRequest};
pub use round_robin::{RoundRobin, RoundRobinOutcome};
pub use strategies::{FirstComeFirstServed, PriorityScheduling, ShortestJobFirst, Strategy};
pub use traits::SchedulingStrategy;
pub use types::{Algorithm, TimeQuantum, TimeSlice};
