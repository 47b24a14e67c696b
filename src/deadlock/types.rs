/*!
 * Deadlock Types
 * Resource snapshots and detection verdicts
 */

use super::matrix::ResourceMatrix;
use crate::core::errors::{ArgResult, InvalidArgument};
use crate::core::serde::is_empty_vec;
use serde::{Deserialize, Serialize};

/// Raw detector input as nested rows, e.g. from a run file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DeadlockInput {
    pub allocation: Vec<Vec<u32>>,
    pub request: Vec<Vec<u32>>,
    pub available: Vec<u32>,
}

impl DeadlockInput {
    pub fn snapshot(&self) -> ArgResult<ResourceSnapshot> {
        ResourceSnapshot::new(&self.allocation, &self.request, &self.available)
    }
}

/// Read-only view of who holds and who wants which resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSnapshot {
    allocation: ResourceMatrix,
    request: ResourceMatrix,
    available: Vec<u32>,
}

impl ResourceSnapshot {
    /// Validate shapes: both matrices n x m, `available` of length m
    pub fn new(allocation: &[Vec<u32>], request: &[Vec<u32>], available: &[u32]) -> ArgResult<Self> {
        let columns = available.len();

        if request.len() != allocation.len() {
            return Err(InvalidArgument::MatrixShapeMismatch {
                expected_rows: allocation.len(),
                actual_rows: request.len(),
            });
        }

        Ok(Self {
            allocation: ResourceMatrix::from_rows("allocation", allocation, columns)?,
            request: ResourceMatrix::from_rows("request", request, columns)?,
            available: available.to_vec(),
        })
    }

    /// Number of processes (matrix rows)
    pub fn process_count(&self) -> usize {
        self.allocation.rows()
    }

    /// Number of resource types (matrix columns)
    pub fn resource_count(&self) -> usize {
        self.available.len()
    }

    pub fn allocation(&self) -> &ResourceMatrix {
        &self.allocation
    }

    pub fn request(&self) -> &ResourceMatrix {
        &self.request
    }

    pub fn available(&self) -> &[u32] {
        &self.available
    }
}

/// Detector verdict with the processes on each side of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DeadlockReport {
    pub deadlocked: bool,
    /// Process indices in the order they were found able to finish
    pub completion_order: Vec<usize>,
    /// Process indices that can never finish; empty unless deadlocked
    #[serde(default, skip_serializing_if = "is_empty_vec")]
    pub blocked: Vec<usize>,
}
