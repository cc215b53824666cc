//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type, the single place where
//! default policy values are read from disk and from the environment. The
//! engine itself never reads configuration; it receives a resolved [`Policy`].

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::Policy;

use super::types::{EngineConfig, ServerConfig};

/// Environment variable overriding the daily base hours.
pub const ENV_BASE_HOURS_PER_DAY: &str = "BASE_HOURS_PER_DAY";
/// Environment variable overriding the default lunch minutes.
pub const ENV_DEFAULT_LUNCH_MINUTES: &str = "DEFAULT_LUNCH_MINUTES";
/// Environment variable overriding the weekly target hours.
pub const ENV_WEEKLY_TARGET_HOURS: &str = "WEEKLY_TARGET_HOURS";

/// Loads and provides access to engine configuration.
///
/// # File Format
///
/// ```text
/// policy:
///   daily_base_hours: 8
///   default_lunch_minutes: 60
///   weekly_target_hours: 48
///   partial_week:
///     sunday_bonus: false
///     sunday_exempt_with_rest_day: false
///     no_rest_day_bonus: false
///     bonus_hours: 8
/// server:
///   bind_address: 0.0.0.0:3000
/// ```
///
/// Every key is optional.
///
/// # Example
///
/// ```no_run
/// use overtime_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml")?.apply_env_overrides();
/// println!("Daily base: {}", loader.policy().daily_base_hours);
/// # Ok::<(), overtime_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
    policy: Policy,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_config(EngineConfig::default())
    }
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing ([`EngineError::ConfigNotFound`])
    /// - The file contains invalid YAML ([`EngineError::ConfigParseError`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        // An empty document deserializes to unit, not to an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: EngineConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self::from_config(config))
    }

    /// Resolves the policy of an already-parsed configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        let policy = config.policy.resolve(&Policy::default());
        Self { config, policy }
    }

    /// Applies policy overrides from the process environment.
    pub fn apply_env_overrides(self) -> Self {
        self.apply_env_overrides_with(|key| std::env::var(key).ok())
    }

    /// Applies policy overrides using `lookup` to read variables.
    ///
    /// Variables that are set but do not parse as numbers are ignored with a
    /// warning. Parsed values still go through policy validation.
    ///
    /// # Example
    ///
    /// ```
    /// use overtime_engine::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::default().apply_env_overrides_with(|key| match key {
    ///     "BASE_HOURS_PER_DAY" => Some("7".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(loader.policy().daily_base_hours, Decimal::new(7, 0));
    /// ```
    pub fn apply_env_overrides_with<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| -> Option<f64> {
            let raw = lookup(key)?;
            match raw.trim().parse::<f64>() {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(
                        variable = key,
                        value = %raw,
                        error = %e,
                        "Ignoring unparsable environment override"
                    );
                    None
                }
            }
        };

        if let Some(value) = read(ENV_BASE_HOURS_PER_DAY) {
            self.config.policy.daily_base_hours = Some(value);
        }
        if let Some(value) = read(ENV_DEFAULT_LUNCH_MINUTES) {
            self.config.policy.default_lunch_minutes = Some(value);
        }
        if let Some(value) = read(ENV_WEEKLY_TARGET_HOURS) {
            self.config.policy.weekly_target_hours = Some(value);
        }

        Self::from_config(self.config)
    }

    /// Returns the resolved default policy.
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_shipped_config() {
        let loader = ConfigLoader::load("config/engine.yaml").unwrap();
        assert_eq!(loader.policy(), &Policy::default());
        assert_eq!(loader.server().bind_address, "0.0.0.0:3000");
    }

    #[test]
    fn test_missing_config_file() {
        let result = ConfigLoader::load("config/does_not_exist.yaml");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("does_not_exist.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml() {
        let result = ConfigLoader::from_yaml_str("policy: [unterminated");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let loader = ConfigLoader::from_yaml_str("").unwrap();
        assert_eq!(loader.policy(), &Policy::default());
        assert_eq!(loader.server(), &ServerConfig::default());
    }

    #[test]
    fn test_partial_policy_in_yaml() {
        let yaml = "policy:\n  weekly_target_hours: 44\n  partial_week:\n    sunday_bonus: true\n";
        let loader = ConfigLoader::from_yaml_str(yaml).unwrap();

        assert_eq!(loader.policy().weekly_target_hours, dec("44"));
        assert_eq!(loader.policy().daily_base_hours, dec("8"));
        assert!(loader.policy().partial_week.sunday_bonus);
    }

    #[test]
    fn test_non_finite_yaml_value_falls_back() {
        let yaml = "policy:\n  daily_base_hours: .inf\n";
        let loader = ConfigLoader::from_yaml_str(yaml).unwrap();
        assert_eq!(loader.policy().daily_base_hours, dec("8"));
    }

    #[test]
    fn test_env_overrides() {
        let loader = ConfigLoader::default().apply_env_overrides_with(|key| match key {
            ENV_BASE_HOURS_PER_DAY => Some("9".to_string()),
            ENV_DEFAULT_LUNCH_MINUTES => Some(" 30 ".to_string()),
            ENV_WEEKLY_TARGET_HOURS => Some("not-a-number".to_string()),
            _ => None,
        });

        assert_eq!(loader.policy().daily_base_hours, dec("9"));
        assert_eq!(loader.policy().default_lunch_minutes, 30);
        assert_eq!(loader.policy().weekly_target_hours, dec("48"));
    }

    #[test]
    fn test_env_overrides_take_precedence_over_file() {
        let loader = ConfigLoader::from_yaml_str("policy:\n  daily_base_hours: 7\n")
            .unwrap()
            .apply_env_overrides_with(|key| {
                (key == ENV_BASE_HOURS_PER_DAY).then(|| "6".to_string())
            });
        assert_eq!(loader.policy().daily_base_hours, dec("6"));
    }

    #[test]
    fn test_negative_env_override_falls_back() {
        let loader = ConfigLoader::default().apply_env_overrides_with(|key| {
            (key == ENV_WEEKLY_TARGET_HOURS).then(|| "-40".to_string())
        });
        assert_eq!(loader.policy().weekly_target_hours, dec("48"));
    }
}
