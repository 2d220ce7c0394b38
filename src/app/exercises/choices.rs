use crate::core::choices::{is_leap_year, Month, Operation, Status, UserRole};
use crate::domain::model::Report;
use crate::domain::ports::Exercise;
use crate::utils::error::Result;
use crate::utils::input::Prompter;
use chrono::Datelike;
use serde_json::json;
use std::io::{BufRead, Write};

pub struct MonthsExercise {
    /// Defaults to the current year.
    pub year: Option<i32>,
    /// Month number 1..=12; all twelve months when absent.
    pub month: Option<i64>,
}

impl Exercise for MonthsExercise {
    type Input = (i32, Vec<Month>);

    fn name(&self) -> &'static str {
        "months"
    }

    fn gather<R: BufRead, W: Write>(&self, _prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        let year = self.year.unwrap_or_else(|| chrono::Local::now().year());
        let months = match self.month {
            Some(number) => vec![Month::try_from(number)?],
            None => Month::ALL.to_vec(),
        };
        Ok((year, months))
    }

    fn solve(&self, (year, months): Self::Input) -> Result<Report> {
        let leap = is_leap_year(year);
        let days: Vec<_> = months
            .iter()
            .map(|&m| json!({ "month": m, "days": m.days(leap) }))
            .collect();

        let header = if leap {
            format!("Days in each month of {} (leap year):", year)
        } else {
            format!("Days in each month of {}:", year)
        };
        let mut report =
            Report::new(self.name(), json!({ "year": year, "leap": leap, "months": days }))
                .line(header);
        for month in months {
            report = report.line(format!("{}: {} days", month.name(), month.days(leap)));
        }
        Ok(report)
    }
}

pub struct StatusExercise {
    pub status: Option<Status>,
}

impl Exercise for StatusExercise {
    type Input = Status;

    fn name(&self) -> &'static str {
        "status"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        if let Some(status) = self.status {
            return Ok(status);
        }
        prompter.prompt("Enter status (success, failure, timeout): ")?;
        let raw: String = prompter.next_token("status")?;
        raw.parse()
    }

    fn solve(&self, status: Self::Input) -> Result<Report> {
        Ok(Report::new(self.name(), json!({ "status": status })).line(status.message()))
    }
}

pub struct CalculatorExercise;

impl Exercise for CalculatorExercise {
    type Input = (i64, i64, i64);

    fn name(&self) -> &'static str {
        "calculator"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        prompter.prompt("Select operation:\n1. ADD\n2. SUBTRACT\n3. MULTIPLY\n")?;
        let choice = prompter.next_token("choice")?;
        prompter.prompt("Enter two integers: ")?;
        let a = prompter.next_token("integer")?;
        let b = prompter.next_token("integer")?;
        Ok((choice, a, b))
    }

    fn solve(&self, (choice, a, b): Self::Input) -> Result<Report> {
        let operation = Operation::try_from(choice)?;
        let result = operation.apply(a, b)?;
        tracing::debug!("{} {} {} = {}", operation, a, b, result);
        Ok(Report::new(
            self.name(),
            json!({ "operation": operation, "a": a, "b": b, "result": result }),
        )
        .line(format!("Result: {}", result)))
    }
}

pub struct RoleExercise;

impl Exercise for RoleExercise {
    type Input = i64;

    fn name(&self) -> &'static str {
        "role"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        prompter.prompt("Select user role:\n0. ADMIN\n1. USER\n2. GUEST\n")?;
        prompter.next_token("role")
    }

    fn solve(&self, choice: Self::Input) -> Result<Report> {
        let role = UserRole::try_from(choice)?;
        Ok(Report::new(self.name(), json!({ "role": role })).line(role.welcome()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::engine::DrillEngine;
    use crate::utils::error::DrillError;
    use std::io::Cursor;

    fn run<E: Exercise>(exercise: E, input: &str) -> Result<Report> {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), 256);
        DrillEngine::new(exercise).run(&mut prompter)
    }

    #[test]
    fn test_months_for_leap_year() {
        let report = run(
            MonthsExercise {
                year: Some(2024),
                month: None,
            },
            "",
        ).unwrap();
        assert_eq!(report.lines.len(), 13);
        assert_eq!(report.lines[0], "Days in each month of 2024 (leap year):");
        assert_eq!(report.lines[2], "February: 29 days");
        assert_eq!(report.data["leap"], true);
    }

    #[test]
    fn test_months_defaults_to_current_year() {
        let report = run(
            MonthsExercise {
                year: None,
                month: None,
            },
            "",
        )
        .unwrap();
        assert_eq!(report.data["year"], chrono::Local::now().year());
    }

    #[test]
    fn test_single_month() {
        let report = run(
            MonthsExercise {
                year: Some(1900),
                month: Some(2),
            },
            "",
        )
        .unwrap();
        assert_eq!(
            report.lines,
            vec!["Days in each month of 1900:", "February: 28 days"]
        );

        let err = run(
            MonthsExercise {
                year: Some(2024),
                month: Some(13),
            },
            "",
        )
        .unwrap_err();
        assert!(matches!(err, DrillError::InvalidChoiceError { .. }));
    }

    #[test]
    fn test_status_prompted() {
        let report = run(StatusExercise { status: None }, "failure\n").unwrap();
        assert_eq!(report.lines, vec!["Operation failed."]);

        let report = run(StatusExercise { status: Some(Status::Success) }, "").unwrap();
        assert_eq!(report.lines, vec!["Operation completed successfully."]);
    }

    #[test]
    fn test_calculator() {
        let report = run(CalculatorExercise, "3\n6 7\n").unwrap();
        assert_eq!(report.lines, vec!["Result: 42"]);

        let err = run(CalculatorExercise, "9\n1 1\n").unwrap_err();
        assert!(matches!(err, DrillError::InvalidChoiceError { .. }));
        assert_eq!(err.user_friendly_message(), "Invalid choice!");
    }

    #[test]
    fn test_role() {
        let report = run(RoleExercise, "1\n").unwrap();
        assert_eq!(report.lines, vec!["Welcome, User! You have limited access."]);
        assert!(run(RoleExercise, "5\n").is_err());
    }
}
