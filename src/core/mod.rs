pub mod choices;
pub mod files;
pub mod matrix;
pub mod patterns;
pub mod sequences;
pub mod strings;
pub mod text_stats;

pub use crate::domain::model::{CharClassCounts, LetterCounts, LetterKind, StudentRecord, TextStats};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
