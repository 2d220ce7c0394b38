use crate::core::matrix::Matrix;
use crate::domain::model::Report;
use crate::domain::ports::Exercise;
use crate::utils::error::Result;
use crate::utils::input::Prompter;
use crate::utils::validation::validate_capacity;
use serde_json::json;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixOp {
    Transpose,
    Symmetric,
    Diagonal,
}

pub struct MatrixExercise {
    pub op: MatrixOp,
    pub max_dim: usize,
}

fn format_row(row: &[i64]) -> String {
    row.iter().map(i64::to_string).collect::<Vec<_>>().join(" ")
}

impl Exercise for MatrixExercise {
    type Input = Matrix;

    fn name(&self) -> &'static str {
        match self.op {
            MatrixOp::Transpose => "transpose",
            MatrixOp::Symmetric => "symmetric",
            MatrixOp::Diagonal => "diagonal",
        }
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        prompter.prompt("Enter number of rows and columns: ")?;
        let rows: usize = prompter.next_token("row count")?;
        let cols: usize = prompter.next_token("column count")?;
        validate_capacity("row count", rows, self.max_dim)?;
        validate_capacity("column count", cols, self.max_dim)?;

        prompter.prompt("Enter elements of the matrix:\n")?;
        let mut data = Vec::with_capacity(rows * cols);
        for _ in 0..rows * cols {
            data.push(prompter.next_token("integer")?);
        }
        Matrix::new(rows, cols, data)
    }

    fn solve(&self, matrix: Self::Input) -> Result<Report> {
        let report = match self.op {
            MatrixOp::Transpose => {
                let t = matrix.transpose();
                let mut report = Report::new(self.name(), json!({ "transpose": t.to_rows() }))
                    .line("Transposed matrix:");
                for i in 0..t.rows() {
                    report = report.line(format_row(t.row(i)));
                }
                report
            }
            MatrixOp::Symmetric => {
                let symmetric = matrix.is_symmetric();
                let verdict = if symmetric {
                    "Matrix is symmetric."
                } else {
                    "Matrix is not symmetric."
                };
                Report::new(self.name(), json!({ "symmetric": symmetric })).line(verdict)
            }
            MatrixOp::Diagonal => {
                let order = matrix.diagonal_traversal();
                Report::new(self.name(), json!({ "order": order }))
                    .line("Diagonal Traversal of the matrix:")
                    .line(format_row(&order))
            }
        };
        Ok(report)
    }
}
