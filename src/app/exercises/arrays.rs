use crate::core::sequences::{
    first_negative_per_window, majority_element, max_subarray_sum, max_window_sum,
    product_except_self,
};
use crate::domain::model::Report;
use crate::domain::ports::Exercise;
use crate::utils::error::Result;
use crate::utils::input::Prompter;
use serde_json::json;
use std::io::{BufRead, Write};

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn read_window<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    max_elements: usize,
) -> Result<(Vec<i64>, usize)> {
    let nums = prompter.read_sequence(max_elements)?;
    prompter.prompt("Enter the size of the subarray k: ")?;
    let k = prompter.next_token("window size")?;
    Ok((nums, k))
}

pub struct MajorityExercise {
    pub max_elements: usize,
}

impl Exercise for MajorityExercise {
    type Input = Vec<i64>;

    fn name(&self) -> &'static str {
        "majority"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        prompter.read_sequence(self.max_elements)
    }

    fn solve(&self, nums: Self::Input) -> Result<Report> {
        let majority = majority_element(&nums);
        let shown = majority.map_or_else(|| "none".to_string(), |m| m.to_string());
        Ok(
            Report::new(self.name(), json!({ "input": nums, "majority": majority }))
                .line(format!("Majority element: {}", shown)),
        )
    }
}

pub struct MaxSubarrayExercise {
    pub max_elements: usize,
}

impl Exercise for MaxSubarrayExercise {
    type Input = Vec<i64>;

    fn name(&self) -> &'static str {
        "max-subarray"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        prompter.read_sequence(self.max_elements)
    }

    fn solve(&self, nums: Self::Input) -> Result<Report> {
        let best = max_subarray_sum(&nums)?;
        Ok(
            Report::new(self.name(), json!({ "input": nums, "max_sum": best }))
                .line(format!("Maximum contiguous subarray sum is: {}", best)),
        )
    }
}

pub struct WindowSumExercise {
    pub max_elements: usize,
}

impl Exercise for WindowSumExercise {
    type Input = (Vec<i64>, usize);

    fn name(&self) -> &'static str {
        "window-sum"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        read_window(prompter, self.max_elements)
    }

    fn solve(&self, (nums, k): Self::Input) -> Result<Report> {
        let best = max_window_sum(&nums, k)?;
        Ok(
            Report::new(self.name(), json!({ "input": nums, "k": k, "max_sum": best })).line(
                format!("The maximum sum of all subarrays of size {} is: {}", k, best),
            ),
        )
    }
}

pub struct FirstNegativeExercise {
    pub max_elements: usize,
}

impl Exercise for FirstNegativeExercise {
    type Input = (Vec<i64>, usize);

    fn name(&self) -> &'static str {
        "first-negative"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        read_window(prompter, self.max_elements)
    }

    fn solve(&self, (nums, k): Self::Input) -> Result<Report> {
        let firsts = first_negative_per_window(&nums, k)?;
        let line = join(&firsts);
        Ok(
            Report::new(self.name(), json!({ "input": nums, "k": k, "first_negatives": firsts }))
                .line(line),
        )
    }
}

pub struct ProductExceptSelfExercise {
    pub max_elements: usize,
}

impl Exercise for ProductExceptSelfExercise {
    type Input = Vec<i64>;

    fn name(&self) -> &'static str {
        "product-except-self"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        prompter.read_sequence(self.max_elements)
    }

    fn solve(&self, nums: Self::Input) -> Result<Report> {
        let answer = product_except_self(&nums)?;
        let line = format!("Output array: {}", join(&answer));
        Ok(Report::new(self.name(), json!({ "input": nums, "output": answer })).line(line))
    }
}
