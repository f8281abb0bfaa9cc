pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::ScenarioConfig;
pub use crate::core::{NameHolder, PersonName, Scenario, ScenarioRunner, Step, Transcript};
pub use crate::utils::error::{NameError, Result};
