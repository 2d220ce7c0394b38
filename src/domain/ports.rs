use crate::domain::model::Report;
use crate::utils::error::Result;
use crate::utils::input::Prompter;
use std::io::{self, BufRead, Write};

/// Byte-level file access for the file exercises. Errors stay `io::Error`
/// so callers can say which file failed.
pub trait Storage {
    fn read_file(&self, path: &str) -> io::Result<Vec<u8>>;
    /// Creates or truncates.
    fn write_file(&self, path: &str, data: &[u8]) -> io::Result<()>;
    /// Creates the file when missing, never truncates.
    fn append_file(&self, path: &str, data: &[u8]) -> io::Result<()>;
}

/// A single read-compute-print exercise, driven by `DrillEngine`.
pub trait Exercise {
    type Input;

    fn name(&self) -> &'static str;

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input>;

    fn solve(&self, input: Self::Input) -> Result<Report>;
}
