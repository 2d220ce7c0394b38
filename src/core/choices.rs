//! Tagged enumerations and the dispatch on them.

use crate::utils::error::{DrillError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn days(self, leap_year: bool) -> u32 {
        match self {
            Month::February if leap_year => 29,
            Month::February => 28,
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl TryFrom<i64> for Month {
    type Error = DrillError;

    fn try_from(value: i64) -> Result<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|v| v.checked_sub(1))
            .and_then(|idx| Month::ALL.get(idx).copied())
            .ok_or_else(|| DrillError::InvalidChoiceError {
                message: format!("Invalid month number {}", value),
            })
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Status {
    Success,
    Failure,
    Timeout,
}

impl Status {
    pub fn message(self) -> &'static str {
        match self {
            Status::Success => "Operation completed successfully.",
            Status::Failure => "Operation failed.",
            Status::Timeout => "Operation timed out.",
        }
    }
}

impl FromStr for Status {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Status::Success),
            "failure" => Ok(Status::Failure),
            "timeout" => Ok(Status::Timeout),
            _ => Err(DrillError::InvalidChoiceError {
                message: "Unknown status.".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Add = 1,
    Subtract = 2,
    Multiply = 3,
}

impl Operation {
    pub fn apply(self, a: i64, b: i64) -> Result<i64> {
        let result = match self {
            Operation::Add => a.checked_add(b),
            Operation::Subtract => a.checked_sub(b),
            Operation::Multiply => a.checked_mul(b),
        };
        result.ok_or_else(|| DrillError::overflow(self.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "ADD",
            Operation::Subtract => "SUBTRACT",
            Operation::Multiply => "MULTIPLY",
        };
        f.write_str(name)
    }
}

impl TryFrom<i64> for Operation {
    type Error = DrillError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            1 => Ok(Operation::Add),
            2 => Ok(Operation::Subtract),
            3 => Ok(Operation::Multiply),
            _ => Err(DrillError::InvalidChoiceError {
                message: "Invalid choice!".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin = 0,
    User = 1,
    Guest = 2,
}

impl UserRole {
    pub fn welcome(self) -> &'static str {
        match self {
            UserRole::Admin => "Welcome, Admin! You have full access.",
            UserRole::User => "Welcome, User! You have limited access.",
            UserRole::Guest => "Welcome, Guest! You have minimal access.",
        }
    }
}

impl TryFrom<i64> for UserRole {
    type Error = DrillError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(UserRole::Admin),
            1 => Ok(UserRole::User),
            2 => Ok(UserRole::Guest),
            _ => Err(DrillError::InvalidChoiceError {
                message: "Invalid role selected!".to_string(),
            }),
        }
    }
}
