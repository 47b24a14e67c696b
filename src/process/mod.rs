/*!
 * Process Module
 * Process records and validated workloads
 */

pub mod types;
pub mod workload;

// Re-export for convenience
pub use types::{ProcessRecord, ProcessState, DEFAULT_PRIORITY};
pub use workload::Workload;
