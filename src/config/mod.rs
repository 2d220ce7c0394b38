pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::OutputFormat;
#[cfg(feature = "cli")]
use crate::core::choices::Status;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-drills")]
#[command(about = "Small textbook exercises: arrays, strings, matrices, files and enums")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format, overrides [output] format from the configuration
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Element occurring in more than half of the positions
    Majority,
    /// Maximum sum of a contiguous subarray (Kadane)
    MaxSubarray,
    /// Maximum sum of any window of size k
    WindowSum,
    /// First negative number of every window of size k
    FirstNegative,
    /// Product of all other elements for each position
    ProductExceptSelf,
    /// Transpose a matrix
    Transpose,
    /// Check whether a matrix is symmetric
    Symmetric,
    /// Print a matrix along its anti-diagonals
    Diagonal,
    /// Check whether a character is a vowel or a consonant
    Vowel,
    /// Count spaces, digits and special characters in a line
    CharClasses,
    /// Check whether two strings are anagrams
    Anagram,
    /// Find the longest word in a sentence
    LongestWord,
    /// Reverse each word of a sentence, keeping word order
    ReverseWords,
    /// Print the initials of a name
    Initials,
    /// Print initials with the surname in full
    InitialsSurname,
    /// Count characters, words and lines of a text file
    CountText { file: Option<String> },
    /// Count vowels and consonants of a text file
    CountLetters { file: Option<String> },
    /// Copy a file
    Copy {
        source: Option<String>,
        destination: Option<String>,
    },
    /// Copy a file converting lowercase letters to uppercase
    Uppercase {
        source: Option<String>,
        destination: Option<String>,
    },
    /// Append a line of text to a file
    Append { file: Option<String> },
    /// Store student records in a file, then read and display them
    Records { file: Option<String> },
    /// Days in each month
    Months {
        #[arg(long)]
        year: Option<i32>,
        /// Only this month (1-12)
        #[arg(long)]
        month: Option<i64>,
    },
    /// Print the message for an operation status
    Status {
        #[arg(value_enum)]
        status: Option<Status>,
    },
    /// Add, subtract or multiply two integers
    Calculator,
    /// Welcome message for a user role
    Role,
    /// Print a diamond of stars
    Diamond,
    /// Swap two numbers
    Swap,
    /// Factorial of a number up to 20
    Factorial,
}
