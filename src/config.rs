//! Engine configuration parsed from environment variables.

use std::env::VarError;
use std::str::FromStr;

use crate::consts::{DEFAULT_HISTORY_MAX_SIZE, DEFAULT_MIN_OBJECT_SIZE};
use crate::error::ConfigError;

pub const HISTORY_MAX_SIZE_VAR: &str = "BOARD_HISTORY_MAX_SIZE";
pub const MIN_OBJECT_SIZE_VAR: &str = "BOARD_MIN_OBJECT_SIZE";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Bound on each of the undo and redo stacks.
    pub history_max_size: usize,
    /// Smallest width/height a resize may produce, in board units.
    pub min_object_size: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { history_max_size: DEFAULT_HISTORY_MAX_SIZE, min_object_size: DEFAULT_MIN_OBJECT_SIZE }
    }
}

impl EngineConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `BOARD_HISTORY_MAX_SIZE`: default 50, must be at least 1
    /// - `BOARD_MIN_OBJECT_SIZE`: default 1.0, must be finite and positive
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a present variable is unparsable or out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env_value(key, std::env::var(key)))
    }

    /// Build config from an arbitrary key lookup. Absent keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a present value is unparsable or out of range.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Self::from_source(|key| Ok(lookup(key)))
    }

    fn from_source(lookup: impl Fn(&str) -> Result<Option<String>, ConfigError>) -> Result<Self, ConfigError> {
        let history_max_size = parse_or(&lookup, HISTORY_MAX_SIZE_VAR, DEFAULT_HISTORY_MAX_SIZE)?;
        if history_max_size == 0 {
            return Err(ConfigError::OutOfRange {
                key: HISTORY_MAX_SIZE_VAR.into(),
                value: history_max_size.to_string(),
                expected: "at least 1",
            });
        }

        let min_object_size: f64 = parse_or(&lookup, MIN_OBJECT_SIZE_VAR, DEFAULT_MIN_OBJECT_SIZE)?;
        if !(min_object_size.is_finite() && min_object_size > 0.0) {
            return Err(ConfigError::OutOfRange {
                key: MIN_OBJECT_SIZE_VAR.into(),
                value: min_object_size.to_string(),
                expected: "finite and positive",
            });
        }

        Ok(Self { history_max_size, min_object_size })
    }
}

/// An unset variable is absent; a set but non-UTF-8 one is an invalid value.
fn env_value(key: &str, var: Result<String, VarError>) -> Result<Option<String>, ConfigError> {
    match var {
        Ok(raw) => Ok(Some(raw)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => {
            Err(ConfigError::InvalidValue { key: key.into(), value: raw.to_string_lossy().into_owned() })
        }
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Result<Option<String>, ConfigError>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    let Some(raw) = lookup(key)? else {
        return Ok(default);
    };
    raw.trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidValue { key: key.into(), value: raw.clone() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
