use serde::{Deserialize, Serialize};

use crate::RemixError;

/// Which verb decides the tense of a recombined sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TenseMatchMode {
    /// Use the tense of the verb the subject originally had.
    MatchSubjectVerbTense,
    /// Keep the predicate's own tense and only fix number agreement.
    #[default]
    PreservePredicateTense,
}

fn default_target_count() -> usize {
    50
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemixConfig {
    #[serde(default, rename = "tenseMatchMode", alias = "tenseMode")]
    pub tense_mode: TenseMatchMode,
    #[serde(default = "default_target_count")]
    pub target_count: usize,
    /// Shuffle seed; the clock is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RemixConfig {
    fn default() -> Self {
        Self {
            tense_mode: TenseMatchMode::default(),
            target_count: default_target_count(),
            seed: None,
        }
    }
}

impl RemixConfig {
    pub fn from_json(json: &str) -> Result<Self, RemixError> {
        let config: RemixConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RemixError> {
        if self.target_count == 0 {
            return Err(RemixError::InvalidTargetCount(self.target_count));
        }
        Ok(())
    }
}
