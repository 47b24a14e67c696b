/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{Pid, Time};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a core simulation operation
pub type ArgResult<T> = Result<T, InvalidArgument>;

/// Result of an outer-layer operation (config loading, report sinks, CLI)
pub type SimResult<T> = Result<T, SimError>;

/// Input contract violations
///
/// Every failure mode of the scheduling strategies and the deadlock detector
/// falls in this class. Inputs are validated before any computation starts,
/// so an error always means there is no partial result.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum InvalidArgument {
    #[error("Unknown scheduling algorithm '{0}'")]
    #[diagnostic(
        code(argument::unknown_algorithm),
        help("Valid algorithms: fcfs, sjf, priority, roundrobin (case-insensitive).")
    )]
    UnknownAlgorithm(String),

    #[error("Priority values are required for Priority Scheduling")]
    #[diagnostic(
        code(argument::missing_priorities),
        help("Supply one priority per process; lower values run first.")
    )]
    MissingPriorities,

    #[error("Priority count {actual} does not match process count {expected}")]
    #[diagnostic(
        code(argument::priority_length_mismatch),
        help("The priority sequence must be index-aligned with the burst times.")
    )]
    PriorityLengthMismatch { expected: usize, actual: usize },

    #[error("A time quantum is required for Round Robin Scheduling")]
    #[diagnostic(
        code(argument::missing_quantum),
        help("Supply a positive time quantum.")
    )]
    MissingQuantum,

    #[error("Invalid time quantum: {0}")]
    #[diagnostic(
        code(argument::invalid_quantum),
        help("The time quantum must be a finite value greater than zero.")
    )]
    InvalidQuantum(Time),

    #[error("Invalid burst time {value} for process at index {index}")]
    #[diagnostic(
        code(argument::invalid_burst_time),
        help("Burst times must be finite and non-negative.")
    )]
    InvalidBurstTime { index: usize, value: Time },

    #[error("Invalid arrival time {value} for process at index {index}")]
    #[diagnostic(
        code(argument::invalid_arrival_time),
        help("Arrival times must be finite and non-negative.")
    )]
    InvalidArrivalTime { index: usize, value: Time },

    #[error("Process at index {index} has id 0")]
    #[diagnostic(
        code(argument::invalid_process_id),
        help("Process ids must be positive integers.")
    )]
    InvalidProcessId { index: usize },

    #[error("Duplicate process id {0}")]
    #[diagnostic(
        code(argument::duplicate_process_id),
        help("Process ids must be unique within a simulation run.")
    )]
    DuplicateProcessId(Pid),

    #[error("Row {row} of the {matrix} matrix has {actual} columns, expected {expected}")]
    #[diagnostic(
        code(argument::ragged_matrix),
        help("Every row needs one cell per resource type (the length of the available vector).")
    )]
    RaggedMatrix {
        matrix: String,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Request matrix has {actual_rows} rows, allocation matrix has {expected_rows}")]
    #[diagnostic(
        code(argument::matrix_shape_mismatch),
        help("Allocation and request matrices need one row per process.")
    )]
    MatrixShapeMismatch {
        expected_rows: usize,
        actual_rows: usize,
    },
}

/// Unified simulator error with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Invalid argument: {0}")]
    #[diagnostic(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(sim::io_error),
        help("Reading the run file or writing the report failed. Check the path and permissions.")
    )]
    Io(String),

    #[error("Serialization error: {0}")]
    #[diagnostic(
        code(sim::serialization_error),
        help("The run file must be valid JSON matching the run configuration schema.")
    )]
    Serialization(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(sim::configuration_error),
        help("Invalid configuration. Review the run file and SCHEDSIM_* environment variables.")
    )]
    Configuration(String),
}

impl SimError {
    /// Whether this error is an input contract violation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SimError::InvalidArgument(_))
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Serialization(err.to_string())
    }
}
