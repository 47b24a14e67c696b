/*!
 * Resource Matrix
 * Fixed-shape, row-major process x resource-type table
 */

use crate::core::errors::{ArgResult, InvalidArgument};
use serde::Serialize;

/// Rows are processes, columns are resource types
///
/// Shape is checked once at construction; cell access afterwards is
/// plain slice indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<u32>,
}

impl ResourceMatrix {
    /// Build from nested rows, each of which must have `columns` cells
    pub fn from_rows(name: &str, rows: &[Vec<u32>], columns: usize) -> ArgResult<Self> {
        let mut cells = Vec::with_capacity(rows.len() * columns);

        for (row, values) in rows.iter().enumerate() {
            if values.len() != columns {
                return Err(InvalidArgument::RaggedMatrix {
                    matrix: name.to_string(),
                    row,
                    expected: columns,
                    actual: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }

        Ok(Self {
            rows: rows.len(),
            columns,
            cells,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Cells of one process
    #[inline]
    pub fn row(&self, index: usize) -> &[u32] {
        let start = index * self.columns;
        &self.cells[start..start + self.columns]
    }
}
