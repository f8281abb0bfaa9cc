use crate::core::{Scenario, Step};
use crate::utils::error::{NameError, Result};
use crate::utils::validation::{validate_positive_number, validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub person: PersonConfig,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonConfig {
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

impl ScenarioConfig {
    /// 從 TOML 檔案載入腳本
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NameError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析腳本
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| NameError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GIVEN_NAME})；未定義的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").unwrap_or_else(|e| panic!("invalid env var pattern: {}", e))
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_required_field("person.given_name", &self.person.given_name)?;
        validate_required_field("person.family_name", &self.person.family_name)?;
        validate_positive_number("steps", self.steps.len(), 1)?;
        Ok(())
    }

    pub fn into_scenario(self) -> Result<Scenario> {
        self.validate_config()?;
        let ScenarioConfig { person, steps } = self;

        Ok(Scenario {
            given_name: person.given_name.unwrap_or_default(),
            family_name: person.family_name.unwrap_or_default(),
            steps,
        })
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
