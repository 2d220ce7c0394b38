use crate::core::patterns::{diamond, factorial, swap_values};
use crate::domain::model::Report;
use crate::domain::ports::Exercise;
use crate::utils::error::Result;
use crate::utils::input::Prompter;
use crate::utils::validation::validate_capacity;
use serde_json::json;
use std::io::{BufRead, Write};

pub struct DiamondExercise {
    pub max_rows: usize,
}

impl Exercise for DiamondExercise {
    type Input = usize;

    fn name(&self) -> &'static str {
        "diamond"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        prompter.prompt("Enter number of rows (odd number): ")?;
        let n = prompter.next_token("row count")?;
        validate_capacity("row count", n, self.max_rows)?;
        Ok(n)
    }

    fn solve(&self, n: Self::Input) -> Result<Report> {
        let rows = diamond(n)?;
        let mut report = Report::new(self.name(), json!({ "rows": rows }));
        for row in &rows {
            report = report.line(row.clone());
        }
        Ok(report)
    }
}

pub struct SwapExercise;

impl Exercise for SwapExercise {
    type Input = (i64, i64);

    fn name(&self) -> &'static str {
        "swap"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        prompter.prompt("Enter a: ")?;
        let a = prompter.next_token("a")?;
        prompter.prompt("Enter b: ")?;
        let b = prompter.next_token("b")?;
        Ok((a, b))
    }

    fn solve(&self, (mut a, mut b): Self::Input) -> Result<Report> {
        let before = (a, b);
        swap_values(&mut a, &mut b);
        Ok(Report::new(
            self.name(),
            json!({ "before": [before.0, before.1], "after": [a, b] }),
        )
        .line("Before swapping:")
        .line(format!("a = {}", before.0))
        .line(format!("b = {}", before.1))
        .line("")
        .line("After swapping:")
        .line(format!("a = {}", a))
        .line(format!("b = {}", b)))
    }
}

pub struct FactorialExercise;

impl Exercise for FactorialExercise {
    type Input = i64;

    fn name(&self) -> &'static str {
        "factorial"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        prompter.prompt("Enter a positive integer: ")?;
        prompter.next_token("integer")
    }

    fn solve(&self, n: Self::Input) -> Result<Report> {
        let result = factorial(n)?;
        Ok(Report::new(self.name(), json!({ "n": n, "factorial": result }))
            .line(format!("Factorial of {} = {}", n, result)))
    }
}
