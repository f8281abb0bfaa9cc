pub mod scenario;

pub use crate::domain::model::PersonName;
pub use crate::domain::ports::NameHolder;
pub use crate::utils::error::Result;
pub use scenario::{Observation, Scenario, ScenarioRunner, Step, Transcript};
