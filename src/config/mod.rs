//! Configuration loading and management for the Overtime Computation Engine.
//!
//! This module resolves the default [`crate::models::Policy`] once, at the
//! application's configuration boundary, from a YAML file and optional
//! environment overrides.
//!
//! # Example
//!
//! ```no_run
//! use overtime_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Weekly target: {}", config.policy().weekly_target_hours);
//! ```

mod loader;
mod types;

pub use loader::{
    ConfigLoader, ENV_BASE_HOURS_PER_DAY, ENV_DEFAULT_LUNCH_MINUTES, ENV_WEEKLY_TARGET_HOURS,
};
pub use types::{DEFAULT_BIND_ADDRESS, EngineConfig, ServerConfig};
