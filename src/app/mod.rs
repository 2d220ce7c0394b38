pub mod engine;
pub mod exercises;

pub use engine::{render, DrillEngine};
