pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{Cli, Command};

pub use adapters::storage::LocalStorage;
pub use app::{render, DrillEngine};
pub use config::toml_config::{DrillConfig, OutputFormat};
pub use domain::model::Report;
pub use domain::ports::{Exercise, Storage};
pub use utils::error::{DrillError, Result};
pub use utils::input::Prompter;
