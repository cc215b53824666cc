//! Configuration types for the Overtime Computation Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use serde::{Deserialize, Serialize};

use crate::models::PolicyOverrides;

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on, e.g. "127.0.0.1:8080".
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

/// The complete configuration file structure.
///
/// Policy values are kept in their raw form so that invalid entries can be
/// detected and replaced by defaults when the policy is resolved.
///
/// # Example
///
/// ```
/// use overtime_engine::config::EngineConfig;
///
/// let yaml = "policy:\n  daily_base_hours: 7.5\nserver:\n  bind_address: 127.0.0.1:8080\n";
/// let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.policy.daily_base_hours, Some(7.5));
/// assert_eq!(config.server.bind_address, "127.0.0.1:8080");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default policy values.
    pub policy: PolicyOverrides,
    /// HTTP server settings.
    pub server: ServerConfig,
}
