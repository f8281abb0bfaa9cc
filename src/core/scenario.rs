use crate::config::{DEFAULT_FAMILY_NAME, DEFAULT_GIVEN_NAME};
use crate::domain::ports::NameHolder;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    SetGivenName { value: String },
    SetFamilyName { value: String },
    SetFullName { value: String },
    ClearFullName,
    ShowGivenName,
    ShowFamilyName,
    ShowFullName,
}

impl Step {
    pub fn label(&self) -> &'static str {
        match self {
            Step::SetGivenName { .. } => "set_given_name",
            Step::SetFamilyName { .. } => "set_family_name",
            Step::SetFullName { .. } => "set_full_name",
            Step::ClearFullName => "clear_full_name",
            Step::ShowGivenName => "given_name",
            Step::ShowFamilyName => "family_name",
            Step::ShowFullName => "full_name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub given_name: String,
    pub family_name: String,
    pub steps: Vec<Step>,
}

impl Scenario {
    /// 示範腳本：讀取、改 given name、整個改寫、刪除。
    pub fn reference() -> Self {
        Self::reference_with(DEFAULT_GIVEN_NAME, DEFAULT_FAMILY_NAME)
    }

    pub fn reference_with(given_name: &str, family_name: &str) -> Self {
        Self {
            given_name: given_name.to_string(),
            family_name: family_name.to_string(),
            steps: vec![
                Step::ShowFullName,
                Step::SetGivenName {
                    value: "javascript".to_string(),
                },
                Step::ShowFullName,
                Step::SetFullName {
                    value: "java.comentado".to_string(),
                },
                Step::ShowGivenName,
                Step::ShowFamilyName,
                Step::ShowFullName,
                Step::ClearFullName,
                Step::ShowGivenName,
                Step::ShowFamilyName,
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub step: usize,
    pub label: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub observations: Vec<Observation>,
}

impl Transcript {
    pub fn values(&self) -> Vec<Option<&str>> {
        self.observations
            .iter()
            .map(|o| o.value.as_deref())
            .collect()
    }

    pub fn render(&self) -> String {
        self.observations
            .iter()
            .map(|o| o.value.as_deref().unwrap_or("None").to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct ScenarioRunner<H: NameHolder> {
    holder: H,
}

impl<H: NameHolder> ScenarioRunner<H> {
    pub fn new(holder: H) -> Self {
        Self { holder }
    }

    pub fn holder(&self) -> &H {
        &self.holder
    }

    pub fn into_holder(self) -> H {
        self.holder
    }

    /// 依序執行步驟；第一個失敗的步驟會中止並回傳其錯誤。
    pub fn run(&mut self, steps: &[Step]) -> Result<Transcript> {
        tracing::info!("Running scenario with {} steps", steps.len());
        let mut transcript = Transcript::default();

        for (index, step) in steps.iter().enumerate() {
            tracing::debug!("Step {}: {:?}", index, step);
            if let Some(value) = self.apply(step).inspect_err(|e| {
                tracing::error!("Step {} ({}) failed: {}", index, step.label(), e);
            })? {
                transcript.observations.push(Observation {
                    step: index,
                    label: step.label().to_string(),
                    value,
                });
            }
        }

        tracing::info!(
            "Scenario finished with {} observations",
            transcript.observations.len()
        );
        Ok(transcript)
    }

    // Outer None: mutating step, nothing observed.
    fn apply(&mut self, step: &Step) -> Result<Option<Option<String>>> {
        match step {
            Step::SetGivenName { value } => {
                self.holder.set_given_name(value);
                Ok(None)
            }
            Step::SetFamilyName { value } => {
                self.holder.set_family_name(value);
                Ok(None)
            }
            Step::SetFullName { value } => {
                self.holder.set_full_name(value)?;
                Ok(None)
            }
            Step::ClearFullName => {
                self.holder.clear_full_name();
                Ok(None)
            }
            Step::ShowGivenName => Ok(Some(self.holder.given_name().map(str::to_string))),
            Step::ShowFamilyName => Ok(Some(self.holder.family_name().map(str::to_string))),
            Step::ShowFullName => Ok(Some(Some(self.holder.full_name()?))),
        }
    }
}
