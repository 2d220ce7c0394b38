use crate::utils::error::{DrillError, Result};
use serde::Serialize;

/// Row-major integer matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl Matrix {
    pub fn new(rows: usize, cols: usize, data: Vec<i64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(DrillError::invalid_input(format!(
                "a {}x{} matrix needs {} elements, got {}",
                rows,
                cols,
                rows * cols,
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[i64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.get(i, j));
            }
        }
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Non-square matrices are never symmetric.
    pub fn is_symmetric(&self) -> bool {
        self.rows == self.cols
            && (0..self.rows).all(|i| (i + 1..self.cols).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Anti-diagonals from the top-left corner, each walked top to bottom.
    pub fn diagonal_traversal(&self) -> Vec<i64> {
        if self.data.is_empty() {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.data.len());
        for k in 0..=(self.rows + self.cols - 2) {
            for i in 0..=k.min(self.rows - 1) {
                let j = k - i;
                if j < self.cols {
                    out.push(self.get(i, j));
                }
            }
        }
        out
    }

    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }
}
