pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::Scenario;
#[cfg(feature = "cli")]
use crate::utils::error::{NameError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_GIVEN_NAME: &str = "python";
pub const DEFAULT_FAMILY_NAME: &str = "comentado";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "person-name")]
#[command(about = "Replays read/write/delete operations on a derived full name")]
pub struct CliConfig {
    #[arg(long, help = "Initial given name for the built-in scenario [default: python]")]
    pub given_name: Option<String>,

    #[arg(long, help = "Initial family name for the built-in scenario [default: comentado]")]
    pub family_name: Option<String>,

    #[arg(
        long,
        help = "TOML scenario file to replay instead of the built-in one; names come from its [person] table"
    )]
    pub scenario: Option<String>,

    #[arg(long, help = "Print the transcript as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 有 --scenario 時從檔案載入，否則使用內建示範腳本
    pub fn load_scenario(&self) -> Result<Scenario> {
        match &self.scenario {
            Some(path) => toml_config::ScenarioConfig::from_file(path)?.into_scenario(),
            None => Ok(Scenario::reference_with(
                self.given_name.as_deref().unwrap_or(DEFAULT_GIVEN_NAME),
                self.family_name.as_deref().unwrap_or(DEFAULT_FAMILY_NAME),
            )),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.scenario {
            validate_path("scenario", path)?;

            // 腳本檔案的 [person] 已決定初始名字
            if let Some(name) = self.given_name.as_ref().or(self.family_name.as_ref()) {
                return Err(NameError::InvalidConfigValueError {
                    field: "given_name/family_name".to_string(),
                    value: name.clone(),
                    reason: "Cannot be combined with --scenario".to_string(),
                });
            }
        }
        Ok(())
    }
}
