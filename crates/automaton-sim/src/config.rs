//! Simulation settings chosen by the host application.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Environment variable overriding [`SimulationConfig::max_input_len`].
pub const ENV_MAX_INPUT_LEN: &str = "AUTOMATA_MAX_INPUT_LEN";
/// Environment variable overriding [`SimulationConfig::halt_on_empty`].
pub const ENV_HALT_ON_EMPTY: &str = "AUTOMATA_HALT_ON_EMPTY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Longest input (in symbols) a run will accept. `None` means unbounded.
    pub max_input_len: Option<usize>,
    /// Stop a nondeterministic run as soon as its state set becomes empty.
    /// When off, the trace gets one (empty) entry per remaining symbol.
    pub halt_on_empty: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_input_len: None,
            halt_on_empty: true,
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a JSON config; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Apply overrides from the process environment.
    ///
    /// Only the two override variables are read. One that is set but not
    /// valid unicode is rejected.
    pub fn merge_with_env(&mut self) -> Result<(), ConfigError> {
        let mut vars = Vec::with_capacity(2);
        for key in [ENV_MAX_INPUT_LEN, ENV_HALT_ON_EMPTY] {
            match std::env::var(key) {
                Ok(value) => vars.push((key, value)),
                Err(std::env::VarError::NotPresent) => {}
                Err(std::env::VarError::NotUnicode(raw)) => {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        value: raw.to_string_lossy().into_owned(),
                    });
                }
            }
        }
        self.merge_from_vars(vars)
    }

    /// Apply overrides from `(name, value)` pairs; unrelated names are ignored.
    ///
    /// An empty or `none` value for the input limit removes the limit. On
    /// error `self` is left unchanged.
    pub fn merge_from_vars<I, K, V>(&mut self, vars: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut merged = self.clone();
        for (key, value) in vars {
            let (key, value) = (key.as_ref(), value.as_ref().trim());
            let invalid = || ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            };
            match key {
                ENV_MAX_INPUT_LEN => {
                    let unbounded = value.is_empty() || value.eq_ignore_ascii_case("none");
                    merged.max_input_len = if unbounded {
                        None
                    } else {
                        Some(value.parse().map_err(|_| invalid())?)
                    };
                }
                ENV_HALT_ON_EMPTY => {
                    merged.halt_on_empty = match value.to_ascii_lowercase().as_str() {
                        "1" | "true" | "yes" | "on" => true,
                        "0" | "false" | "no" | "off" => false,
                        _ => return Err(invalid()),
                    };
                }
                _ => {}
            }
        }
        merged.validate()?;
        *self = merged;
        Ok(())
    }

    /// Reject settings no run could satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_len == Some(0) {
            return Err(ConfigError::ZeroInputLimit);
        }
        Ok(())
    }
}
