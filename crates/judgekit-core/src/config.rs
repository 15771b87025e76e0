//! Run configuration read from the environment.

use crate::adapter::DEFAULT_ADAPTER;
use crate::error::{JudgeError, Result};

/// Selects the result adapter. Defaults to `ifmo`.
pub const CHECKER_TYPE_ENV: &str = "JUDGEKIT_CHECKER_TYPE";

/// When set, the run becomes a self-test against this exit code.
pub const EXPECTED_EXIT_CODE_ENV: &str = "JUDGEKIT_EXPECTED_EXIT_CODE";

/// Optional prefix accepted in front of the adapter id.
const CHECKER_TYPE_PREFIX: &str = "checker-type:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub adapter_id: String,
    pub expected_exit_code: Option<i32>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            adapter_id: DEFAULT_ADAPTER.to_string(),
            expected_exit_code: None,
        }
    }
}

impl RunConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let adapter_id = lookup(CHECKER_TYPE_ENV)
            .map(|raw| normalize_adapter_id(&raw))
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| DEFAULT_ADAPTER.to_string());

        let expected_exit_code = match lookup(EXPECTED_EXIT_CODE_ENV) {
            Some(raw) if !raw.trim().is_empty() => {
                let code = raw.trim().parse::<i32>().map_err(|err| {
                    JudgeError::Config(format!(
                        "{} must be an integer, got {:?}: {}",
                        EXPECTED_EXIT_CODE_ENV, raw, err
                    ))
                })?;
                Some(code)
            }
            _ => None,
        };

        Ok(Self {
            adapter_id,
            expected_exit_code,
        })
    }

    pub fn with_adapter(mut self, id: impl AsRef<str>) -> Self {
        self.adapter_id = normalize_adapter_id(id.as_ref());
        self
    }

    pub fn with_expected_exit_code(mut self, code: i32) -> Self {
        self.expected_exit_code = Some(code);
        self
    }
}

/// Strip the optional `checker-type:` prefix and surrounding whitespace.
pub fn normalize_adapter_id(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix(CHECKER_TYPE_PREFIX)
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}
