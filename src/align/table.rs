//! Dense LCS length table.

use crate::errors::AlignError;

/// Longest-common-subsequence lengths for every prefix pair of two sequences.
///
/// `get(i, j)` is the LCS length of the first `i` expected elements and the
/// first `j` actual elements. Row 0 and column 0 are always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    pub(crate) fn build<T: PartialEq>(
        expected: &[T],
        actual: &[T],
        cell_limit: Option<usize>,
    ) -> Result<Self, AlignError> {
        let allocation_failed = AlignError::Allocation {
            rows: expected.len().saturating_add(1),
            cols: actual.len().saturating_add(1),
        };
        let (rows, cols) = match (expected.len().checked_add(1), actual.len().checked_add(1)) {
            (Some(rows), Some(cols)) => (rows, cols),
            _ => return Err(allocation_failed),
        };

        let len = rows.checked_mul(cols).ok_or_else(|| allocation_failed.clone())?;
        if cell_limit.is_some_and(|limit| len > limit) {
            return Err(allocation_failed);
        }

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| allocation_failed)?;
        cells.resize(len, 0);

        for (i, x) in expected.iter().enumerate() {
            for (j, y) in actual.iter().enumerate() {
                let value = if x == y {
                    cells[i * cols + j] + 1
                } else {
                    cells[(i + 1) * cols + j].max(cells[i * cols + j + 1])
                };
                cells[(i + 1) * cols + j + 1] = value;
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Number of rows, `len(expected) + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `len(actual) + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// LCS length of `expected[..i]` and `actual[..j]`.
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows && j < self.cols, "cell ({}, {}) out of bounds", i, j);
        self.cells[i * self.cols + j]
    }

    /// LCS length of the full sequences.
    pub fn lcs_len(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }
}
