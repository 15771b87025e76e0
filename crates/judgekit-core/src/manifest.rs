//! Embedded component selection.
//!
//! A build may pin its checker or validator so that the first command-line
//! argument is no longer needed to name it.

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub checker: Option<String>,
    #[serde(default)]
    pub validator: Option<String>,
}

impl Manifest {
    /// Selection baked in at build time through `JUDGEKIT_CHECKER` and
    /// `JUDGEKIT_VALIDATOR`.
    pub fn embedded() -> Self {
        Self {
            checker: non_empty(option_env!("JUDGEKIT_CHECKER")),
            validator: non_empty(option_env!("JUDGEKIT_VALIDATOR")),
        }
    }

    /// Parse a manifest such as `{"checker": "compare-integers"}`.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn with_checker(mut self, id: impl Into<String>) -> Self {
        self.checker = Some(id.into());
        self
    }

    pub fn with_validator(mut self, id: impl Into<String>) -> Self {
        self.validator = Some(id.into());
        self
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
