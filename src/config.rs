//! Policy configuration
//!
//! Thresholds and the dialing code, with environment overrides.

use thiserror::Error;

pub const DEFAULT_MIN_LENGTH: usize = 10;
pub const RELAXED_MIN_LENGTH: usize = 8;
pub const DEFAULT_MAX_LENGTH: usize = 50;
pub const DEFAULT_DIAL_CODE: &str = "20";

pub const MIN_LENGTH_VAR: &str = "PWD_POLICY_MIN_LENGTH";
pub const MAX_LENGTH_VAR: &str = "PWD_POLICY_MAX_LENGTH";
pub const DIAL_CODE_VAR: &str = "PWD_POLICY_DIAL_CODE";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid number: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("Dialing code must be 1 to 4 digits, got {0:?}")]
    InvalidDialCode(String),
    #[error("Invalid length range: min {min}, max {max}")]
    InvalidRange { min: usize, max: usize },
}

/// Password policy settings.
///
/// Pick one config per form and use it consistently for both the live
/// checklist and the submission gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Minimum password length, in characters.
    pub min_length: usize,
    /// International dialing code, without the leading `+`.
    pub dial_code: String,
    /// Maximum password length accepted by the sign-up form.
    pub max_length: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            dial_code: DEFAULT_DIAL_CODE.to_string(),
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl PolicyConfig {
    /// The 8-character variant.
    pub fn relaxed() -> Self {
        Self {
            min_length: RELAXED_MIN_LENGTH,
            ..Self::default()
        }
    }

    /// Builds a config from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_POLICY_MIN_LENGTH` (default: 10)
    /// - `PWD_POLICY_MAX_LENGTH` (default: 50)
    /// - `PWD_POLICY_DIAL_CODE` (default: `20`)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set to an unparsable value or the
    /// resulting config fails [`PolicyConfig::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            min_length: read_usize(MIN_LENGTH_VAR)?.unwrap_or(defaults.min_length),
            max_length: read_usize(MAX_LENGTH_VAR)?.unwrap_or(defaults.max_length),
            dial_code: std::env::var(DIAL_CODE_VAR)
                .map(|v| v.trim().trim_start_matches('+').to_string())
                .unwrap_or(defaults.dial_code),
        };

        if let Err(e) = config.validate() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Password policy config rejected: {}", e);
            return Err(e);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Password policy loaded: min_length={}, max_length={}, dial_code=+{}",
            config.min_length,
            config.max_length,
            config.dial_code
        );

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let code = &self.dial_code;
        if code.is_empty() || code.len() > 4 || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidDialCode(code.clone()));
        }
        if self.min_length == 0 || self.min_length > self.max_length {
            return Err(ConfigError::InvalidRange {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }
}

fn read_usize(var: &'static str) -> Result<Option<usize>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| {
                #[cfg(feature = "tracing")]
                tracing::warn!("Invalid value for {}: {:?}", var, value);
                ConfigError::InvalidNumber { var, value: value.clone() }
            }),
        Err(_) => Ok(None),
    }
}
